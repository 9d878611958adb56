// src/handlers/crm.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireAccess, ResVehicleCustomer},
    models::crm::{
        CreateCustomerPayload, CreateVehiclePayload, Customer, UpdateCustomerPayload,
        UpdateVehiclePayload, Vehicle,
    },
};

// ---
// Clientes
// ---

#[utoipa::path(
    get,
    path = "/api/vehicle-customer/customers",
    tag = "CRM",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<Customer>),
        (status = 403, description = "Sem acesso a veículos e clientes")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_customers(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResVehicleCustomer>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = app_state.crm_repo.get_all_customers().await?;
    Ok(Json(customers))
}

#[utoipa::path(
    post,
    path = "/api/vehicle-customer/customers",
    tag = "CRM",
    request_body = CreateCustomerPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Customer),
        (status = 400, description = "Campos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_customer(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResVehicleCustomer>,
    Json(payload): Json<CreateCustomerPayload>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let customer = app_state.crm_repo.create_customer(&payload).await?;
    tracing::info!("✅ Cliente '{}' cadastrado", customer.name);
    Ok((StatusCode::CREATED, Json(customer)))
}

#[utoipa::path(
    put,
    path = "/api/vehicle-customer/customers/{id}",
    tag = "CRM",
    request_body = UpdateCustomerPayload,
    params(("id" = i32, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente atualizado", body = Customer),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_customer(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResVehicleCustomer>,
    Json(payload): Json<UpdateCustomerPayload>,
) -> Result<Json<Customer>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let customer = app_state
        .crm_repo
        .update_customer(id, &payload)
        .await?
        .ok_or(AppError::NotFound("Cliente"))?;
    Ok(Json(customer))
}

#[utoipa::path(
    delete,
    path = "/api/vehicle-customer/customers/{id}",
    tag = "CRM",
    params(("id" = i32, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente removido"),
        (status = 404, description = "Cliente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_customer(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResVehicleCustomer>,
) -> Result<StatusCode, AppError> {
    if !app_state.crm_repo.delete_customer(id).await? {
        return Err(AppError::NotFound("Cliente"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---
// Veículos
// ---

#[utoipa::path(
    get,
    path = "/api/vehicle-customer/vehicles",
    tag = "CRM",
    responses(
        (status = 200, description = "Lista de veículos", body = Vec<Vehicle>),
        (status = 403, description = "Sem acesso a veículos e clientes")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_all_vehicles(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResVehicleCustomer>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let vehicles = app_state.crm_repo.get_all_vehicles().await?;
    Ok(Json(vehicles))
}

#[utoipa::path(
    post,
    path = "/api/vehicle-customer/vehicles",
    tag = "CRM",
    request_body = CreateVehiclePayload,
    responses(
        (status = 201, description = "Veículo criado", body = Vehicle),
        (status = 400, description = "Campos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_vehicle(
    State(app_state): State<AppState>,
    _guard: RequireAccess<ResVehicleCustomer>,
    Json(payload): Json<CreateVehiclePayload>,
) -> Result<(StatusCode, Json<Vehicle>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let vehicle = app_state.crm_repo.create_vehicle(&payload).await?;
    tracing::info!("✅ Veículo {} {} cadastrado", vehicle.make, vehicle.model);
    Ok((StatusCode::CREATED, Json(vehicle)))
}

#[utoipa::path(
    put,
    path = "/api/vehicle-customer/vehicles/{id}",
    tag = "CRM",
    request_body = UpdateVehiclePayload,
    params(("id" = i32, Path, description = "ID do veículo")),
    responses(
        (status = 200, description = "Veículo atualizado", body = Vehicle),
        (status = 404, description = "Veículo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_vehicle(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResVehicleCustomer>,
    Json(payload): Json<UpdateVehiclePayload>,
) -> Result<Json<Vehicle>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let vehicle = app_state
        .crm_repo
        .update_vehicle(id, &payload)
        .await?
        .ok_or(AppError::NotFound("Veículo"))?;
    Ok(Json(vehicle))
}

#[utoipa::path(
    delete,
    path = "/api/vehicle-customer/vehicles/{id}",
    tag = "CRM",
    params(("id" = i32, Path, description = "ID do veículo")),
    responses(
        (status = 204, description = "Veículo removido"),
        (status = 404, description = "Veículo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_vehicle(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    _guard: RequireAccess<ResVehicleCustomer>,
) -> Result<StatusCode, AppError> {
    if !app_state.crm_repo.delete_vehicle(id).await? {
        return Err(AppError::NotFound("Veículo"));
    }
    Ok(StatusCode::NO_CONTENT)
}
