// src/services/stock_alerts.rs

// Motor de alertas de reposição: transforma a foto atual do estoque numa
// lista classificada de alerta. Função pura — a mesma coleção de itens (e
// o mesmo instante) produz sempre a mesma lista, na ordem dos itens.
//
// O "dispensar" de um alerta é estado de sessão, nunca atributo do item:
// vive no AlertFeed e zera a cada recomputação.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::inventory::Item;

const FALLBACK_DAYS_SINCE_ORDER: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i32,
    pub item_name: String,
    pub current_stock: i64,
    pub min_stock: i64,
    pub supplier: String,
    pub urgency: Urgency,
    pub last_ordered: NaiveDate,
    pub days_since_order: i64,
    // Sugestão de pedido: 2x o estoque mínimo, nunca menos que 10.
    pub suggested_reorder: i64,
}

// Classificação em ordem, primeiro match vence; limites superiores
// inclusivos (quantity == min_stock ainda é medium, não "adequado").
fn classify(quantity: i64, min_stock: i64) -> Option<Urgency> {
    let q = quantity as f64;
    let min = min_stock as f64;

    if quantity == 0 {
        Some(Urgency::Critical)
    } else if q <= min * 0.3 {
        Some(Urgency::Critical)
    } else if q <= min * 0.6 {
        Some(Urgency::High)
    } else if q <= min {
        Some(Urgency::Medium)
    } else {
        None
    }
}

fn default_last_ordered() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

// Teto de (agora − data do último pedido) em dias, como a tela calculava
// sobre milissegundos; sem data registrada assume 30 dias.
fn days_since_order(now: DateTime<Utc>, last_ordered: Option<NaiveDate>) -> i64 {
    let Some(date) = last_ordered else {
        return FALLBACK_DAYS_SINCE_ORDER;
    };
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let secs = (now - midnight).num_seconds();
    if secs <= 0 {
        return 0;
    }
    (secs + 86_399) / 86_400
}

pub fn suggested_reorder_qty(min_stock: i64) -> i64 {
    (min_stock * 2).max(10)
}

// Deriva os alertas da coleção de itens. Itens acima do mínimo são
// omitidos; a ordem de saída preserva a ordem de iteração dos itens.
pub fn compute_alerts(items: &[Item], now: DateTime<Utc>) -> Vec<Alert> {
    items
        .iter()
        .filter_map(|item| {
            let quantity = item.quantity.max(0);
            let min_stock = item.min_stock.max(0);
            let urgency = classify(quantity, min_stock)?;

            let item_name = if item.name.trim().is_empty() {
                "Unknown Item".to_string()
            } else {
                item.name.clone()
            };
            let supplier = item
                .supplier
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Unknown Supplier".to_string());

            Some(Alert {
                id: item.id,
                item_name,
                current_stock: quantity,
                min_stock,
                supplier,
                urgency,
                last_ordered: item.last_ordered.unwrap_or_else(default_last_ordered),
                days_since_order: days_since_order(now, item.last_ordered),
                suggested_reorder: suggested_reorder_qty(min_stock),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct AlertSummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
}

// Visão de sessão sobre os alertas computados. Dispensar um id só esconde
// o alerta desta visão; a próxima recomputação volta com tudo ativo.
#[derive(Debug, Clone)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
    dismissed: HashSet<i32>,
}

impl AlertFeed {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts, dismissed: HashSet::new() }
    }

    pub fn dismiss(&mut self, alert_id: i32) {
        self.dismissed.insert(alert_id);
    }

    pub fn dismissed_count(&self) -> usize {
        self.dismissed.len()
    }

    // Alertas não dispensados, na ordem original.
    pub fn active(&self) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| !self.dismissed.contains(&a.id))
            .collect()
    }

    // Visão padrão (show_all = false): só critical e high; medium fica
    // escondido até o usuário pedir tudo. A ordem nunca é re-ordenada
    // por urgência.
    pub fn view(&self, show_all: bool) -> Vec<&Alert> {
        self.active()
            .into_iter()
            .filter(|a| show_all || matches!(a.urgency, Urgency::Critical | Urgency::High))
            .collect()
    }

    // Contagens sempre sobre o conjunto ATIVO, não sobre o total bruto.
    pub fn summary(&self) -> AlertSummary {
        let mut summary = AlertSummary::default();
        for alert in self.active() {
            match alert.urgency {
                Urgency::Critical => summary.critical += 1,
                Urgency::High => summary.high += 1,
                Urgency::Medium => summary.medium += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(id: i32, quantity: i64, min_stock: i64) -> Item {
        let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        Item {
            id,
            name: format!("Item {}", id),
            category: None,
            company: None,
            supplier: None,
            unit: None,
            quantity,
            min_stock,
            last_ordered: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn classificacao_de_urgencia_por_faixa() {
        let items = vec![
            item(1, 0, 10),  // zerado
            item(2, 2, 10),  // <= 30%
            item(3, 6, 10),  // <= 60%
            item(4, 9, 10),  // <= mínimo
            item(5, 20, 10), // adequado, omitido
        ];
        let alerts = compute_alerts(&items, now());

        assert_eq!(alerts.len(), 4);
        assert_eq!(
            alerts.iter().map(|a| a.urgency).collect::<Vec<_>>(),
            vec![Urgency::Critical, Urgency::Critical, Urgency::High, Urgency::Medium]
        );
        assert!(alerts.iter().all(|a| a.id != 5));
    }

    #[test]
    fn limite_superior_e_inclusivo() {
        // quantity == min_stock classifica como medium, não "sem alerta"
        let alerts = compute_alerts(&[item(1, 10, 10)], now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].urgency, Urgency::Medium);

        // exatamente 30% ainda é critical, exatamente 60% ainda é high
        let alerts = compute_alerts(&[item(1, 3, 10), item(2, 6, 10)], now());
        assert_eq!(alerts[0].urgency, Urgency::Critical);
        assert_eq!(alerts[1].urgency, Urgency::High);
    }

    #[test]
    fn item_zerado_e_critical_mesmo_sem_minimo() {
        let alerts = compute_alerts(&[item(1, 0, 0)], now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].urgency, Urgency::Critical);
    }

    #[test]
    fn recomputacao_e_idempotente() {
        let items = vec![item(1, 0, 10), item(2, 6, 10), item(3, 9, 10)];
        let a = compute_alerts(&items, now());
        let b = compute_alerts(&items, now());
        assert_eq!(a, b);
    }

    #[test]
    fn fallbacks_de_nome_fornecedor_e_data() {
        let mut faltando = item(7, 1, 10);
        faltando.name = "".into();
        faltando.supplier = Some("  ".into());
        faltando.last_ordered = None;

        let alerts = compute_alerts(&[faltando], now());
        let alert = &alerts[0];
        assert_eq!(alert.item_name, "Unknown Item");
        assert_eq!(alert.supplier, "Unknown Supplier");
        assert_eq!(alert.last_ordered, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(alert.days_since_order, 30);
    }

    #[test]
    fn dias_desde_o_pedido_arredondam_para_cima() {
        let mut com_data = item(1, 1, 10);
        com_data.last_ordered = NaiveDate::from_ymd_opt(2026, 8, 26);

        // 2 dias e meio atrás -> teto = 3
        let alerts = compute_alerts(&[com_data], now());
        assert_eq!(alerts[0].days_since_order, 3);
    }

    #[test]
    fn sugestao_de_pedido_tem_piso_de_dez() {
        assert_eq!(suggested_reorder_qty(2), 10);
        assert_eq!(suggested_reorder_qty(10), 20);
        let alerts = compute_alerts(&[item(1, 1, 4)], now());
        assert_eq!(alerts[0].suggested_reorder, 10);
    }

    #[test]
    fn dispensar_esconde_da_visao_mas_nao_da_recomputacao() {
        let items = vec![item(1, 0, 10), item(2, 6, 10)];
        let mut feed = AlertFeed::new(compute_alerts(&items, now()));

        feed.dismiss(1);
        assert!(feed.view(true).iter().all(|a| a.id != 1));
        assert_eq!(feed.dismissed_count(), 1);

        // Recomputar do zero ressuscita o alerta dispensado.
        let fresh = compute_alerts(&items, now());
        assert!(fresh.iter().any(|a| a.id == 1));
    }

    #[test]
    fn visao_padrao_esconde_medium() {
        let items = vec![item(1, 0, 10), item(2, 6, 10), item(3, 9, 10)];
        let feed = AlertFeed::new(compute_alerts(&items, now()));

        let padrao = feed.view(false);
        assert_eq!(padrao.len(), 2);
        assert!(padrao.iter().all(|a| a.urgency != Urgency::Medium));

        let completa = feed.view(true);
        assert_eq!(completa.len(), 3);
    }

    #[test]
    fn visao_preserva_a_ordem_original() {
        // medium antes de critical na entrada: a visão completa não reordena
        let items = vec![item(1, 9, 10), item(2, 0, 10), item(3, 6, 10)];
        let feed = AlertFeed::new(compute_alerts(&items, now()));
        let ids: Vec<i32> = feed.view(true).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn contagens_usam_o_conjunto_ativo() {
        let items = vec![item(1, 0, 10), item(2, 2, 10), item(3, 6, 10), item(4, 9, 10)];
        let mut feed = AlertFeed::new(compute_alerts(&items, now()));
        assert_eq!(feed.summary(), AlertSummary { critical: 2, high: 1, medium: 1 });

        feed.dismiss(1);
        feed.dismiss(3);
        assert_eq!(feed.summary(), AlertSummary { critical: 1, high: 0, medium: 1 });
    }
}
