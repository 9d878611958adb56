// src/handlers/inventory.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireAccess, ResInventory},
    models::inventory::{BulkDeletePayload, CreateItemPayload, Item, UpdateItemPayload},
    services::stock_alerts::{self, Alert, AlertFeed, AlertSummary},
};

// ---
// Itens
// ---

#[utoipa::path(
    get,
    path = "/api/inventory/items",
    tag = "Inventory",
    responses(
        (status = 200, description = "Lista de itens de estoque", body = Vec<Item>),
        (status = 403, description = "Sem acesso ao estoque")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_items(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResInventory>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = app_state.inventory_repo.get_all_items().await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/inventory/items",
    tag = "Inventory",
    request_body = CreateItemPayload,
    responses(
        (status = 201, description = "Item criado", body = Item),
        (status = 400, description = "Campos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_item(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResInventory>,
    Json(payload): Json<CreateItemPayload>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let item = app_state.inventory_repo.create_item(&payload).await?;
    tracing::info!("✅ Item '{}' cadastrado no estoque", item.name);
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/inventory/items/{id}",
    tag = "Inventory",
    request_body = UpdateItemPayload,
    params(("id" = i32, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item atualizado", body = Item),
        (status = 404, description = "Item não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_item(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResInventory>,
    Json(payload): Json<UpdateItemPayload>,
) -> Result<Json<Item>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let item = app_state
        .inventory_repo
        .update_item(id, &payload)
        .await?
        .ok_or(AppError::NotFound("Item"))?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/inventory/items/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "ID do item")),
    responses(
        (status = 204, description = "Item removido"),
        (status = 404, description = "Item não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_item(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResInventory>,
) -> Result<StatusCode, AppError> {
    if !app_state.inventory_repo.delete_item(id).await? {
        return Err(AppError::NotFound("Item"));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/inventory/items/bulk-delete",
    tag = "Inventory",
    request_body = BulkDeletePayload,
    responses(
        (status = 200, description = "Itens removidos em massa"),
        (status = 400, description = "Lista de ids vazia")
    ),
    security(("api_jwt" = []))
)]
pub async fn bulk_delete_items(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResInventory>,
    Json(payload): Json<BulkDeletePayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let deleted = app_state.inventory_repo.delete_items(&payload.ids).await?;
    tracing::info!("{} itens removidos em massa", deleted);
    Ok(Json(json!({ "deleted": deleted })))
}

// ---
// Alertas de reposição
// ---

#[derive(Debug, Deserialize, IntoParams)]
pub struct AlertQuery {
    // false (padrão) esconde os alertas medium.
    #[serde(default)]
    pub show_all: bool,

    // Ids dispensados nesta sessão, separados por vírgula (ex.: "3,17").
    // O servidor não guarda nada: dispensa é estado do cliente.
    pub dismissed: Option<String>,
}

#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertFeedResponse {
    pub alerts: Vec<Alert>,
    pub summary: AlertSummary,
    pub active_count: usize,
    pub dismissed_count: usize,
}

#[utoipa::path(
    get,
    path = "/api/inventory/reorder-alerts",
    tag = "Inventory",
    params(AlertQuery),
    responses(
        (status = 200, description = "Alertas de reposição classificados", body = AlertFeedResponse),
        (status = 403, description = "Sem acesso ao estoque")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_reorder_alerts(
    State(app_state): State<AppState>,
    Query(query): Query<AlertQuery>,
    _guard: RequireAccess<ResInventory>,
) -> Result<Json<AlertFeedResponse>, AppError> {
    let items = app_state.inventory_repo.get_items_by_insertion().await?;

    let mut feed = AlertFeed::new(stock_alerts::compute_alerts(&items, Utc::now()));
    if let Some(dismissed) = &query.dismissed {
        for raw in dismissed.split(',') {
            if let Ok(id) = raw.trim().parse::<i32>() {
                feed.dismiss(id);
            }
        }
    }

    let response = AlertFeedResponse {
        alerts: feed.view(query.show_all).into_iter().cloned().collect(),
        summary: feed.summary(),
        active_count: feed.active().len(),
        dismissed_count: feed.dismissed_count(),
    };
    Ok(Json(response))
}
