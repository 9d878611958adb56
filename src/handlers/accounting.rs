// src/handlers/accounting.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireAccess, ResAccounts},
    models::accounting::{
        BalanceSheetReport, CreateLedgerEntryPayload, CreateVoucherPayload, LedgerEntry,
        LedgerStatement, ProfitLossReport, TrialBalanceReport, Voucher,
    },
    services::accounting,
};

// ---
// Comprovantes de pagamento
// ---

#[utoipa::path(
    get,
    path = "/api/accounts/vouchers",
    tag = "Accounts",
    responses(
        (status = 200, description = "Lista de comprovantes", body = Vec<Voucher>),
        (status = 403, description = "Sem acesso à contabilidade")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_vouchers(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResAccounts>,
) -> Result<Json<Vec<Voucher>>, AppError> {
    let vouchers = app_state.accounting_repo.get_all_vouchers().await?;
    Ok(Json(vouchers))
}

#[utoipa::path(
    post,
    path = "/api/accounts/vouchers",
    tag = "Accounts",
    request_body = CreateVoucherPayload,
    responses(
        (status = 201, description = "Comprovante criado com número sequencial", body = Voucher),
        (status = 400, description = "Campos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_voucher(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResAccounts>,
    Json(payload): Json<CreateVoucherPayload>,
) -> Result<(StatusCode, Json<Voucher>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let voucher = app_state.accounting_repo.create_voucher(&payload).await?;
    tracing::info!("✅ Comprovante {} emitido para '{}'", voucher.voucher_no, voucher.payee);
    Ok((StatusCode::CREATED, Json(voucher)))
}

#[utoipa::path(
    delete,
    path = "/api/accounts/vouchers/{id}",
    tag = "Accounts",
    params(("id" = i32, Path, description = "ID do comprovante")),
    responses(
        (status = 204, description = "Comprovante removido"),
        (status = 404, description = "Comprovante não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_voucher(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResAccounts>,
) -> Result<StatusCode, AppError> {
    if !app_state.accounting_repo.delete_voucher(id).await? {
        return Err(AppError::NotFound("Comprovante"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---
// Razão
// ---

#[utoipa::path(
    get,
    path = "/api/accounts/ledger",
    tag = "Accounts",
    responses(
        (status = 200, description = "Todos os lançamentos do razão", body = Vec<LedgerEntry>),
        (status = 403, description = "Sem acesso à contabilidade")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_entries(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResAccounts>,
) -> Result<Json<Vec<LedgerEntry>>, AppError> {
    let entries = app_state.accounting_repo.get_all_entries().await?;
    Ok(Json(entries))
}

#[utoipa::path(
    post,
    path = "/api/accounts/ledger",
    tag = "Accounts",
    request_body = CreateLedgerEntryPayload,
    responses(
        (status = 201, description = "Lançamento registrado", body = LedgerEntry),
        (status = 400, description = "Campos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_entry(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResAccounts>,
    Json(payload): Json<CreateLedgerEntryPayload>,
) -> Result<(StatusCode, Json<LedgerEntry>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let entry = app_state.accounting_repo.create_entry(&payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    delete,
    path = "/api/accounts/ledger/{id}",
    tag = "Accounts",
    params(("id" = i32, Path, description = "ID do lançamento")),
    responses(
        (status = 204, description = "Lançamento removido"),
        (status = 404, description = "Lançamento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_entry(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResAccounts>,
) -> Result<StatusCode, AppError> {
    if !app_state.accounting_repo.delete_entry(id).await? {
        return Err(AppError::NotFound("Lançamento"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// O extrato mora sob /ledger/statement/{account} para não conflitar com
// o DELETE /ledger/{id} acima.
#[utoipa::path(
    get,
    path = "/api/accounts/ledger/statement/{account}",
    tag = "Accounts",
    params(("account" = String, Path, description = "Nome da conta")),
    responses(
        (status = 200, description = "Extrato da conta com saldo corrente", body = LedgerStatement),
        (status = 403, description = "Sem acesso à contabilidade")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_statement(
    State(app_state): State<AppState>,
    Path(account): Path<String>,
    _guard: RequireAccess<ResAccounts>,
) -> Result<Json<LedgerStatement>, AppError> {
    let entries = app_state.accounting_repo.get_entries_for_account(&account).await?;
    Ok(Json(accounting::ledger_statement(&account, entries)))
}

// ---
// Relatórios (sempre recalculados do livro)
// ---

#[utoipa::path(
    get,
    path = "/api/accounts/trial-balance",
    tag = "Accounts",
    responses(
        (status = 200, description = "Balancete de verificação", body = TrialBalanceReport),
        (status = 403, description = "Sem acesso à contabilidade")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_trial_balance(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResAccounts>,
) -> Result<Json<TrialBalanceReport>, AppError> {
    let entries = app_state.accounting_repo.get_all_entries().await?;
    Ok(Json(accounting::trial_balance(&entries)))
}

#[utoipa::path(
    get,
    path = "/api/accounts/profit-loss",
    tag = "Accounts",
    responses(
        (status = 200, description = "Demonstração de resultado", body = ProfitLossReport),
        (status = 403, description = "Sem acesso à contabilidade")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_profit_loss(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResAccounts>,
) -> Result<Json<ProfitLossReport>, AppError> {
    let entries = app_state.accounting_repo.get_all_entries().await?;
    Ok(Json(accounting::profit_loss(&entries)))
}

#[utoipa::path(
    get,
    path = "/api/accounts/balance-sheet",
    tag = "Accounts",
    responses(
        (status = 200, description = "Balanço patrimonial", body = BalanceSheetReport),
        (status = 403, description = "Sem acesso à contabilidade")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_balance_sheet(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResAccounts>,
) -> Result<Json<BalanceSheetReport>, AppError> {
    let entries = app_state.accounting_repo.get_all_entries().await?;
    Ok(Json(accounting::balance_sheet(&entries)))
}
