// src/services/accounting.rs

// Derivação de relatórios contábeis a partir dos lançamentos do razão.
// Tudo aqui é pura agregação: os relatórios nunca são persistidos, são
// recalculados do livro a cada consulta.

use rust_decimal::Decimal;

use crate::models::accounting::{
    BalanceSheetReport, EntryCategory, EntrySide, LedgerEntry, LedgerLine, LedgerStatement,
    ProfitLossReport, TrialBalanceReport, TrialBalanceRow,
};

fn signed_amount(entry: &LedgerEntry) -> Decimal {
    match entry.side {
        EntrySide::Debit => entry.amount,
        EntrySide::Credit => -entry.amount,
    }
}

// Extrato de uma conta: saldo corrente linha a linha (débito soma,
// crédito subtrai). As entradas já chegam ordenadas por data/id.
pub fn ledger_statement(account: &str, entries: Vec<LedgerEntry>) -> LedgerStatement {
    let mut balance = Decimal::ZERO;
    let lines: Vec<LedgerLine> = entries
        .into_iter()
        .map(|entry| {
            balance += signed_amount(&entry);
            LedgerLine { entry, balance }
        })
        .collect();

    LedgerStatement {
        account: account.to_string(),
        lines,
        closing_balance: balance,
    }
}

// Balancete: totais de débito e crédito por conta, na ordem da primeira
// ocorrência de cada conta no livro.
pub fn trial_balance(entries: &[LedgerEntry]) -> TrialBalanceReport {
    let mut rows: Vec<TrialBalanceRow> = Vec::new();

    for entry in entries {
        let idx = match rows.iter().position(|r| r.account == entry.account) {
            Some(idx) => idx,
            None => {
                rows.push(TrialBalanceRow {
                    account: entry.account.clone(),
                    debit: Decimal::ZERO,
                    credit: Decimal::ZERO,
                });
                rows.len() - 1
            }
        };
        match entry.side {
            EntrySide::Debit => rows[idx].debit += entry.amount,
            EntrySide::Credit => rows[idx].credit += entry.amount,
        }
    }

    let total_debit: Decimal = rows.iter().map(|r| r.debit).sum();
    let total_credit: Decimal = rows.iter().map(|r| r.credit).sum();

    TrialBalanceReport {
        rows,
        total_debit,
        total_credit,
        is_balanced: total_debit == total_credit,
    }
}

// DRE simplificada: só entram lançamentos categorizados como receita ou
// despesa; o resto do livro é ignorado.
pub fn profit_loss(entries: &[LedgerEntry]) -> ProfitLossReport {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for entry in entries {
        match entry.category {
            Some(EntryCategory::Income) => total_income += entry.amount,
            Some(EntryCategory::Expense) => total_expense += entry.amount,
            _ => {}
        }
    }

    ProfitLossReport {
        net_profit: total_income - total_expense,
        total_income,
        total_expense,
    }
}

// Balanço patrimonial: ativos contra passivos + patrimônio líquido.
pub fn balance_sheet(entries: &[LedgerEntry]) -> BalanceSheetReport {
    let mut total_assets = Decimal::ZERO;
    let mut total_liabilities = Decimal::ZERO;
    let mut total_equity = Decimal::ZERO;

    for entry in entries {
        let amount = signed_amount(entry);
        match entry.category {
            // Ativo cresce com débito; passivo e PL crescem com crédito.
            Some(EntryCategory::Asset) => total_assets += amount,
            Some(EntryCategory::Liability) => total_liabilities -= amount,
            Some(EntryCategory::Equity) => total_equity -= amount,
            _ => {}
        }
    }

    BalanceSheetReport {
        total_assets,
        total_liabilities,
        total_equity,
        is_balanced: total_assets == total_liabilities + total_equity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn entry(
        id: i32,
        account: &str,
        side: EntrySide,
        amount: Decimal,
        category: Option<EntryCategory>,
    ) -> LedgerEntry {
        LedgerEntry {
            id,
            account: account.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            description: None,
            side,
            amount,
            category,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn extrato_acumula_saldo_corrente() {
        let entries = vec![
            entry(1, "Caixa", EntrySide::Debit, dec!(100), None),
            entry(2, "Caixa", EntrySide::Credit, dec!(30), None),
            entry(3, "Caixa", EntrySide::Debit, dec!(50), None),
        ];
        let statement = ledger_statement("Caixa", entries);

        let balances: Vec<Decimal> = statement.lines.iter().map(|l| l.balance).collect();
        assert_eq!(balances, vec![dec!(100), dec!(70), dec!(120)]);
        assert_eq!(statement.closing_balance, dec!(120));
    }

    #[test]
    fn extrato_vazio_fecha_em_zero() {
        let statement = ledger_statement("Caixa", vec![]);
        assert!(statement.lines.is_empty());
        assert_eq!(statement.closing_balance, Decimal::ZERO);
    }

    #[test]
    fn balancete_agrupa_por_conta_e_detecta_equilibrio() {
        let entries = vec![
            entry(1, "Caixa", EntrySide::Debit, dec!(500), None),
            entry(2, "Receita de Serviços", EntrySide::Credit, dec!(500), None),
            entry(3, "Caixa", EntrySide::Debit, dec!(200), None),
            entry(4, "Receita de Serviços", EntrySide::Credit, dec!(200), None),
        ];
        let report = trial_balance(&entries);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].account, "Caixa");
        assert_eq!(report.rows[0].debit, dec!(700));
        assert_eq!(report.rows[1].credit, dec!(700));
        assert_eq!(report.total_debit, dec!(700));
        assert_eq!(report.total_credit, dec!(700));
        assert!(report.is_balanced);
    }

    #[test]
    fn balancete_desequilibrado_e_sinalizado() {
        let entries = vec![entry(1, "Caixa", EntrySide::Debit, dec!(100), None)];
        let report = trial_balance(&entries);
        assert!(!report.is_balanced);
    }

    #[test]
    fn dre_ignora_lancamentos_sem_categoria() {
        let entries = vec![
            entry(1, "Receita de Serviços", EntrySide::Credit, dec!(1000), Some(EntryCategory::Income)),
            entry(2, "Aluguel", EntrySide::Debit, dec!(400), Some(EntryCategory::Expense)),
            entry(3, "Caixa", EntrySide::Debit, dec!(1000), None),
        ];
        let report = profit_loss(&entries);

        assert_eq!(report.total_income, dec!(1000));
        assert_eq!(report.total_expense, dec!(400));
        assert_eq!(report.net_profit, dec!(600));
    }

    #[test]
    fn balanco_fecha_quando_ativo_igual_passivo_mais_pl() {
        let entries = vec![
            entry(1, "Caixa", EntrySide::Debit, dec!(800), Some(EntryCategory::Asset)),
            entry(2, "Empréstimos", EntrySide::Credit, dec!(300), Some(EntryCategory::Liability)),
            entry(3, "Capital Social", EntrySide::Credit, dec!(500), Some(EntryCategory::Equity)),
        ];
        let report = balance_sheet(&entries);

        assert_eq!(report.total_assets, dec!(800));
        assert_eq!(report.total_liabilities, dec!(300));
        assert_eq!(report.total_equity, dec!(500));
        assert!(report.is_balanced);
    }
}
