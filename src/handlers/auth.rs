// src/handlers/auth.rs

use axum::{extract::State, Json};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{AuthResponse, LoginPayload, User},
};

// Handler de login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login bem-sucedido", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let (token, user) = app_state
        .auth_service
        .login_user(&payload.email, &payload.password)
        .await?;

    tracing::info!("✅ Login de '{}' ({})", user.email, user.role);
    Ok(Json(AuthResponse { token, user }))
}

// Handler da rota protegida /me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Usuário autenticado", body = User),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}

// Logout é sem estado no servidor: o token continua válido até expirar;
// quem o descarta é o cliente. A rota existe para qualquer papel
// autenticado confirmar a saída.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Sessão encerrada no cliente"),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn logout(AuthenticatedUser(user): AuthenticatedUser) -> Json<serde_json::Value> {
    tracing::info!("Logout de '{}'", user.email);
    Json(json!({ "message": "Sessão encerrada." }))
}
