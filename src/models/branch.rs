// src/models/branch.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: i32,

    #[schema(example = "Main Branch")]
    pub name: String,

    #[schema(example = "Downtown")]
    pub address: String,

    pub contact: String,
    pub manager: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "O endereço é obrigatório."))]
    pub address: String,

    #[validate(length(min = 1, message = "O contato é obrigatório."))]
    pub contact: String,

    #[validate(length(min = 1, message = "O responsável é obrigatório."))]
    pub manager: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBranchPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub manager: Option<String>,
}
