// src/handlers/operations.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireAccess, ResInventory},
    models::operations::{CreateJobOrderPayload, JobOrder, UpdateJobOrderPayload},
};

// As ordens de serviço moram sob o módulo de estoque na navegação, então
// compartilham o mesmo recurso de acesso.

#[utoipa::path(
    get,
    path = "/api/inventory/job-orders",
    tag = "Operations",
    responses(
        (status = 200, description = "Lista de ordens de serviço", body = Vec<JobOrder>),
        (status = 403, description = "Sem acesso ao estoque")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_job_orders(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResInventory>,
) -> Result<Json<Vec<JobOrder>>, AppError> {
    let orders = app_state.operations_repo.get_all_job_orders().await?;
    Ok(Json(orders))
}

#[utoipa::path(
    post,
    path = "/api/inventory/job-orders",
    tag = "Operations",
    request_body = CreateJobOrderPayload,
    responses(
        (status = 201, description = "Ordem de serviço criada", body = JobOrder),
        (status = 400, description = "Campos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_job_order(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResInventory>,
    Json(payload): Json<CreateJobOrderPayload>,
) -> Result<(StatusCode, Json<JobOrder>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let order = app_state.operations_repo.create_job_order(&payload).await?;
    tracing::info!("✅ Ordem de serviço #{} aberta para '{}'", order.id, order.customer);
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    put,
    path = "/api/inventory/job-orders/{id}",
    tag = "Operations",
    request_body = UpdateJobOrderPayload,
    params(("id" = i32, Path, description = "ID da ordem de serviço")),
    responses(
        (status = 200, description = "Ordem de serviço atualizada", body = JobOrder),
        (status = 404, description = "Ordem de serviço não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_job_order(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResInventory>,
    Json(payload): Json<UpdateJobOrderPayload>,
) -> Result<Json<JobOrder>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let order = app_state
        .operations_repo
        .update_job_order(id, &payload)
        .await?
        .ok_or(AppError::NotFound("Ordem de serviço"))?;
    Ok(Json(order))
}

#[utoipa::path(
    delete,
    path = "/api/inventory/job-orders/{id}",
    tag = "Operations",
    params(("id" = i32, Path, description = "ID da ordem de serviço")),
    responses(
        (status = 204, description = "Ordem de serviço removida"),
        (status = 404, description = "Ordem de serviço não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_job_order(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResInventory>,
) -> Result<StatusCode, AppError> {
    if !app_state.operations_repo.delete_job_order(id).await? {
        return Err(AppError::NotFound("Ordem de serviço"));
    }
    Ok(StatusCode::NO_CONTENT)
}
