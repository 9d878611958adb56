// src/handlers/users.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireAccess, ResUsers},
    models::auth::{CreateUserPayload, UpdateUserPayload, User},
};

fn role_validation_error(e: validator::ValidationError) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    errors.add("role", e);
    AppError::ValidationError(errors)
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Lista de usuários", body = Vec<User>),
        (status = 403, description = "Sem acesso a usuários")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_users(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResUsers>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = app_state.user_repo.get_all().await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = User),
        (status = 400, description = "Campos inválidos"),
        (status = 409, description = "E-mail já em uso")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResUsers>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<(StatusCode, Json<User>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let password_hash = app_state.auth_service.hash_password(&payload.password).await?;
    let user = app_state
        .user_repo
        .create(
            &payload.name,
            &payload.email,
            &password_hash,
            &payload.role,
            payload.branch_id,
        )
        .await?;

    tracing::info!("✅ Usuário '{}' criado com papel '{}'", user.email, user.role);
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    request_body = UpdateUserPayload,
    params(("id" = i32, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário atualizado", body = User),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResUsers>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<Json<User>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    payload.validate_role_if_present().map_err(role_validation_error)?;

    // Re-hasheia só quando uma senha nova veio no payload.
    let new_password_hash = match &payload.password {
        Some(password) => Some(app_state.auth_service.hash_password(password).await?),
        None => None,
    };

    let user = app_state
        .user_repo
        .update(id, &payload, new_password_hash)
        .await?
        .ok_or(AppError::NotFound("Usuário"))?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário removido"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResUsers>,
) -> Result<StatusCode, AppError> {
    if !app_state.user_repo.delete(id).await? {
        return Err(AppError::NotFound("Usuário"));
    }
    Ok(StatusCode::NO_CONTENT)
}
