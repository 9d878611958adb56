// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

// Os cards do painel: um título por papel + contagens gerais.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[schema(example = "Manager Dashboard")]
    pub headline: String,

    pub items: i64,
    pub customers: i64,
    pub vehicles: i64,
    pub branches: i64,
    pub pending_job_orders: i64,
}
