// src/handlers/branches.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireAccess, ResBranches},
    models::branch::{Branch, CreateBranchPayload, UpdateBranchPayload},
};

#[utoipa::path(
    get,
    path = "/api/branches",
    tag = "Branches",
    responses(
        (status = 200, description = "Lista de filiais", body = Vec<Branch>),
        (status = 403, description = "Sem acesso a filiais")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_branches(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResBranches>,
) -> Result<Json<Vec<Branch>>, AppError> {
    let branches = app_state.branch_repo.get_all().await?;
    Ok(Json(branches))
}

#[utoipa::path(
    post,
    path = "/api/branches",
    tag = "Branches",
    request_body = CreateBranchPayload,
    responses(
        (status = 201, description = "Filial criada", body = Branch),
        (status = 400, description = "Campos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_branch(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResBranches>,
    Json(payload): Json<CreateBranchPayload>,
) -> Result<(StatusCode, Json<Branch>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let branch = app_state.branch_repo.create(&payload).await?;
    tracing::info!("✅ Filial '{}' criada", branch.name);
    Ok((StatusCode::CREATED, Json(branch)))
}

#[utoipa::path(
    put,
    path = "/api/branches/{id}",
    tag = "Branches",
    request_body = UpdateBranchPayload,
    params(("id" = i32, Path, description = "ID da filial")),
    responses(
        (status = 200, description = "Filial atualizada", body = Branch),
        (status = 404, description = "Filial não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_branch(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResBranches>,
    Json(payload): Json<UpdateBranchPayload>,
) -> Result<Json<Branch>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let branch = app_state
        .branch_repo
        .update(id, &payload)
        .await?
        .ok_or(AppError::NotFound("Filial"))?;
    Ok(Json(branch))
}

#[utoipa::path(
    delete,
    path = "/api/branches/{id}",
    tag = "Branches",
    params(("id" = i32, Path, description = "ID da filial")),
    responses(
        (status = 204, description = "Filial removida"),
        (status = 404, description = "Filial não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_branch(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResBranches>,
) -> Result<StatusCode, AppError> {
    if !app_state.branch_repo.delete(id).await? {
        return Err(AppError::NotFound("Filial"));
    }
    Ok(StatusCode::NO_CONTENT)
}
