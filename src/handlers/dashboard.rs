// src/handlers/dashboard.rs

use axum::{extract::State, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::dashboard::DashboardSummary,
    services::access_policy::Role,
};

// Título do painel conforme o papel; papel desconhecido cai no genérico.
fn headline_for(role: &str) -> String {
    match Role::parse(role) {
        Some(Role::SuperAdmin) => "Super Admin Dashboard".to_string(),
        Some(Role::Admin) => "Admin Dashboard".to_string(),
        Some(Role::Manager) => "Manager Dashboard".to_string(),
        Some(Role::BranchManager) => "Branch Manager Dashboard".to_string(),
        Some(Role::Cashier) => "Cashier Dashboard".to_string(),
        Some(Role::Technician) => "Technician Dashboard".to_string(),
        Some(Role::Accountant) => "Accountant Dashboard".to_string(),
        Some(Role::Receptionist) => "Receptionist Dashboard".to_string(),
        None => "Dashboard".to_string(),
    }
}

// O painel vale para qualquer papel autenticado: o auth_guard já barrou
// quem não tem token, e a política libera "dashboard" para todos.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo do painel conforme o papel", body = DashboardSummary),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<DashboardSummary>, AppError> {
    let counts = app_state.dashboard_repo.get_counts().await?;

    Ok(Json(DashboardSummary {
        headline: headline_for(&user.role),
        items: counts.items,
        customers: counts.customers,
        vehicles: counts.vehicles,
        branches: counts.branches,
        pending_job_orders: counts.pending_job_orders,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titulo_segue_o_papel() {
        assert_eq!(headline_for("manager"), "Manager Dashboard");
        assert_eq!(headline_for("branch_manager"), "Branch Manager Dashboard");
    }

    #[test]
    fn papel_desconhecido_cai_no_generico() {
        assert_eq!(headline_for("estagiario"), "Dashboard");
        assert_eq!(headline_for(""), "Dashboard");
    }
}
