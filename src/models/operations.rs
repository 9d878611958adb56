// src/models/operations.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "job_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Pending
    }
}

// Ordem de serviço de uma baia da oficina.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobOrder {
    pub id: i32,

    #[schema(example = "João Pereira")]
    pub customer: String,

    #[schema(example = "Corolla 2020")]
    pub vehicle: String,

    #[schema(example = "Troca de óleo")]
    pub service_type: String,

    pub status: JobStatus,

    #[schema(example = "Baia 2")]
    pub assigned_bay: String,

    // Mantido como texto livre (vem direto do campo datetime-local da tela).
    pub scheduled_time: String,

    pub technician: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobOrderPayload {
    #[validate(length(min = 1, message = "O cliente é obrigatório."))]
    pub customer: String,

    #[validate(length(min = 1, message = "O veículo é obrigatório."))]
    pub vehicle: String,

    #[validate(length(min = 1, message = "O tipo de serviço é obrigatório."))]
    pub service_type: String,

    #[serde(default)]
    pub status: JobStatus,

    #[validate(length(min = 1, message = "A baia é obrigatória."))]
    pub assigned_bay: String,

    #[validate(length(min = 1, message = "O horário agendado é obrigatório."))]
    pub scheduled_time: String,

    #[validate(length(min = 1, message = "O técnico é obrigatório."))]
    pub technician: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobOrderPayload {
    pub customer: Option<String>,
    pub vehicle: Option<String>,
    pub service_type: Option<String>,
    pub status: Option<JobStatus>,
    pub assigned_bay: Option<String>,
    pub scheduled_time: Option<String>,
    pub technician: Option<String>,
}
