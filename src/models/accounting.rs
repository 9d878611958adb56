// src/models/accounting.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// --- Comprovante de pagamento ---
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: i32,

    #[schema(example = "PV-0001")]
    pub voucher_no: String,

    pub date: NaiveDate,

    #[schema(example = "Auto Peças Silva")]
    pub payee: String,

    pub description: Option<String>,
    pub payment_method: Option<String>,
    pub account_head: Option<String>,

    #[schema(example = 350.0)]
    pub amount: Decimal,

    pub reference: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoucherPayload {
    pub date: NaiveDate,

    #[validate(length(min = 1, message = "O beneficiário é obrigatório."))]
    pub payee: String,

    pub description: Option<String>,
    pub payment_method: Option<String>,
    pub account_head: Option<String>,

    #[validate(custom(function = "validate_not_negative"))]
    pub amount: Decimal,

    pub reference: Option<String>,
}

// --- Lançamentos de razão ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "entry_side", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntrySide {
    Debit,
    Credit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "entry_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntryCategory {
    Income,
    Expense,
    Asset,
    Liability,
    Equity,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: i32,

    #[schema(example = "Caixa")]
    pub account: String,

    pub date: NaiveDate,
    pub description: Option<String>,
    pub side: EntrySide,

    #[schema(example = 150.0)]
    pub amount: Decimal,

    pub category: Option<EntryCategory>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLedgerEntryPayload {
    #[validate(length(min = 1, message = "A conta é obrigatória."))]
    pub account: String,

    pub date: NaiveDate,
    pub description: Option<String>,
    pub side: EntrySide,

    #[validate(custom(function = "validate_not_negative"))]
    pub amount: Decimal,

    pub category: Option<EntryCategory>,
}

// --- Relatórios derivados (nunca persistidos) ---

// Linha do razão com saldo corrente.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LedgerLine {
    #[serde(flatten)]
    pub entry: LedgerEntry,

    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStatement {
    pub account: String,
    pub lines: Vec<LedgerLine>,
    pub closing_balance: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceRow {
    pub account: String,
    pub debit: Decimal,
    pub credit: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceReport {
    pub rows: Vec<TrialBalanceRow>,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub is_balanced: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossReport {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_profit: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetReport {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub total_equity: Decimal,
    pub is_balanced: bool,
}
