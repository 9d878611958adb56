// src/models/inventory.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// --- Item de estoque ---
// Categoria, empresa, fornecedor e unidade são etiquetas livres (sem FK),
// exatamente como a tela de cadastro trata esses campos.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i32,

    #[schema(example = "Filtro de óleo")]
    pub name: String,

    pub category: Option<String>,
    pub company: Option<String>,
    pub supplier: Option<String>,
    pub unit: Option<String>,

    #[schema(example = 4)]
    pub quantity: i64,

    #[schema(example = 10)]
    pub min_stock: i64,

    pub last_ordered: Option<NaiveDate>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---
// Coerção leniente de números de estoque
// ---
// Regra do domínio: quantity/minStock nunca derrubam a requisição. Valor
// ausente ou ilegível degrada para o padrão (0 / 10) e negativo é travado
// em zero. Aceitamos número, string numérica ("5 pcs" vira 5) ou lixo.

fn default_quantity() -> i64 {
    0
}

fn default_min_stock() -> i64 {
    10
}

// parseInt-like: sinal opcional + dígitos iniciais; o resto é ignorado.
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| if negative { -n } else { n })
}

fn coerce_stock_number(value: &serde_json::Value, fallback: i64) -> i64 {
    let parsed = match value {
        serde_json::Value::Number(n) => {
            n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))
        }
        serde_json::Value::String(s) => parse_int_prefix(s),
        _ => None,
    };
    parsed.unwrap_or(fallback).max(0)
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_stock_number(&value, default_quantity()))
}

fn lenient_min_stock<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_stock_number(&value, default_min_stock()))
}

fn lenient_quantity_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Some(coerce_stock_number(&value, default_quantity())))
}

fn lenient_min_stock_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Some(coerce_stock_number(&value, default_min_stock())))
}

// ---
// Payloads
// ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    pub category: Option<String>,
    pub company: Option<String>,
    pub supplier: Option<String>,
    pub unit: Option<String>,

    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    #[schema(value_type = i64)]
    pub quantity: i64,

    #[serde(default = "default_min_stock", deserialize_with = "lenient_min_stock")]
    #[schema(value_type = i64)]
    pub min_stock: i64,

    pub last_ordered: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,

    pub category: Option<String>,
    pub company: Option<String>,
    pub supplier: Option<String>,
    pub unit: Option<String>,

    #[serde(default, deserialize_with = "lenient_quantity_opt")]
    #[schema(value_type = Option<i64>)]
    pub quantity: Option<i64>,

    #[serde(default, deserialize_with = "lenient_min_stock_opt")]
    #[schema(value_type = Option<i64>)]
    pub min_stock: Option<i64>,

    pub last_ordered: Option<NaiveDate>,
}

// Exclusão em massa (a tabela de itens permite selecionar vários).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BulkDeletePayload {
    #[validate(length(min = 1, message = "Informe ao menos um id."))]
    pub ids: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_payload(body: serde_json::Value) -> CreateItemPayload {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn campos_ausentes_degradam_para_padroes() {
        let payload = create_payload(json!({ "name": "Filtro" }));
        assert_eq!(payload.quantity, 0);
        assert_eq!(payload.min_stock, 10);
    }

    #[test]
    fn strings_numericas_sao_aceitas() {
        let payload = create_payload(json!({
            "name": "Filtro",
            "quantity": "7",
            "minStock": "15 pcs"
        }));
        assert_eq!(payload.quantity, 7);
        assert_eq!(payload.min_stock, 15);
    }

    #[test]
    fn lixo_vira_padrao_e_nunca_erro() {
        let payload = create_payload(json!({
            "name": "Filtro",
            "quantity": "abc",
            "minStock": null
        }));
        assert_eq!(payload.quantity, 0);
        assert_eq!(payload.min_stock, 10);
    }

    #[test]
    fn negativos_travam_em_zero() {
        let payload = create_payload(json!({
            "name": "Filtro",
            "quantity": -3,
            "minStock": "-9"
        }));
        assert_eq!(payload.quantity, 0);
        assert_eq!(payload.min_stock, 0);
    }

    #[test]
    fn float_e_truncado_como_parse_int() {
        let payload = create_payload(json!({ "name": "Filtro", "quantity": 4.9 }));
        assert_eq!(payload.quantity, 4);
    }

    #[test]
    fn atualizacao_parcial_preserva_ausencia() {
        let payload: UpdateItemPayload =
            serde_json::from_value(json!({ "minStock": "20" })).unwrap();
        assert_eq!(payload.quantity, None);
        assert_eq!(payload.min_stock, Some(20));
    }
}
