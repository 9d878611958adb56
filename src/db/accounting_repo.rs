// src/db/accounting_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::accounting::{
        CreateLedgerEntryPayload, CreateVoucherPayload, LedgerEntry, Voucher,
    },
};

#[derive(Clone)]
pub struct AccountingRepository {
    pool: PgPool,
}

impl AccountingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Comprovantes de pagamento
    // ---

    pub async fn get_all_vouchers(&self) -> Result<Vec<Voucher>, AppError> {
        let vouchers =
            sqlx::query_as::<_, Voucher>("SELECT * FROM vouchers ORDER BY date DESC, id DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(vouchers)
    }

    // O número do comprovante (PV-0001, PV-0002...) é gerado dentro do
    // INSERT a partir do maior id corrente.
    pub async fn create_voucher(
        &self,
        payload: &CreateVoucherPayload,
    ) -> Result<Voucher, AppError> {
        let voucher = sqlx::query_as::<_, Voucher>(
            "INSERT INTO vouchers \
                (voucher_no, date, payee, description, payment_method, account_head, amount, reference) \
             VALUES ( \
                'PV-' || LPAD(((SELECT COALESCE(MAX(id), 0) + 1 FROM vouchers))::TEXT, 4, '0'), \
                $1, $2, $3, $4, $5, $6, $7 \
             ) RETURNING *",
        )
        .bind(payload.date)
        .bind(&payload.payee)
        .bind(payload.description.as_deref())
        .bind(payload.payment_method.as_deref())
        .bind(payload.account_head.as_deref())
        .bind(payload.amount)
        .bind(payload.reference.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(voucher)
    }

    pub async fn delete_voucher(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vouchers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ---
    // Lançamentos do razão
    // ---
    // Os relatórios (balancete, DRE, balanço) agregam sobre estas leituras;
    // a ordem data/id é o que dá sentido ao saldo corrente do extrato.

    pub async fn get_all_entries(&self) -> Result<Vec<LedgerEntry>, AppError> {
        let entries = sqlx::query_as::<_, LedgerEntry>(
            "SELECT * FROM ledger_entries ORDER BY date ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn get_entries_for_account(
        &self,
        account: &str,
    ) -> Result<Vec<LedgerEntry>, AppError> {
        let entries = sqlx::query_as::<_, LedgerEntry>(
            "SELECT * FROM ledger_entries WHERE account = $1 ORDER BY date ASC, id ASC",
        )
        .bind(account)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn create_entry(
        &self,
        payload: &CreateLedgerEntryPayload,
    ) -> Result<LedgerEntry, AppError> {
        let entry = sqlx::query_as::<_, LedgerEntry>(
            "INSERT INTO ledger_entries (account, date, description, side, amount, category) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&payload.account)
        .bind(payload.date)
        .bind(payload.description.as_deref())
        .bind(payload.side)
        .bind(payload.amount)
        .bind(payload.category)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    pub async fn delete_entry(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM ledger_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
