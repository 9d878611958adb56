// src/models/crm.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

// Cliente da oficina, com as preferências de engajamento que a recepção
// cadastra (pacote preferido, marca de óleo, tipo de pneu...).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i32,

    #[schema(example = "João Pereira")]
    pub name: String,

    pub contact: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub preferred_communication: Option<String>,
    pub preferred_package: Option<String>,
    pub oil_brand: Option<String>,
    pub tire_type: Option<String>,

    #[schema(example = 120)]
    pub loyalty_points: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    pub contact: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub address: Option<String>,
    pub preferred_communication: Option<String>,
    pub preferred_package: Option<String>,
    pub oil_brand: Option<String>,
    pub tire_type: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Pontos de fidelidade não podem ser negativos."))]
    pub loyalty_points: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,
    pub contact: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub address: Option<String>,
    pub preferred_communication: Option<String>,
    pub preferred_package: Option<String>,
    pub oil_brand: Option<String>,
    pub tire_type: Option<String>,

    #[validate(range(min = 0, message = "Pontos de fidelidade não podem ser negativos."))]
    pub loyalty_points: Option<i32>,
}

// Veículo atendido; pode ou não estar vinculado a um cliente cadastrado.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i32,

    #[schema(example = "Toyota")]
    pub make: String,

    #[schema(example = "Corolla")]
    pub model: String,

    pub vin: Option<String>,
    pub reg_no: Option<String>,
    pub year: Option<i32>,
    pub odometer: Option<i32>,
    pub engine_no: Option<String>,
    pub chassis_no: Option<String>,
    pub customer_id: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehiclePayload {
    #[validate(length(min = 1, message = "A marca é obrigatória."))]
    pub make: String,

    #[validate(length(min = 1, message = "O modelo é obrigatório."))]
    pub model: String,

    pub vin: Option<String>,
    pub reg_no: Option<String>,
    pub year: Option<i32>,

    #[validate(range(min = 0, message = "O hodômetro não pode ser negativo."))]
    pub odometer: Option<i32>,

    pub engine_no: Option<String>,
    pub chassis_no: Option<String>,
    pub customer_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehiclePayload {
    #[validate(length(min = 1, message = "A marca não pode ficar vazia."))]
    pub make: Option<String>,

    #[validate(length(min = 1, message = "O modelo não pode ficar vazio."))]
    pub model: Option<String>,

    pub vin: Option<String>,
    pub reg_no: Option<String>,
    pub year: Option<i32>,

    #[validate(range(min = 0, message = "O hodômetro não pode ser negativo."))]
    pub odometer: Option<i32>,

    pub engine_no: Option<String>,
    pub chassis_no: Option<String>,
    pub customer_id: Option<i32>,
}
