// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::get_me,
        handlers::auth::logout,

        // --- Users ---
        handlers::users::get_all_users,
        handlers::users::create_user,
        handlers::users::update_user,
        handlers::users::delete_user,

        // --- Branches ---
        handlers::branches::get_all_branches,
        handlers::branches::create_branch,
        handlers::branches::update_branch,
        handlers::branches::delete_branch,

        // --- Inventory ---
        handlers::inventory::get_all_items,
        handlers::inventory::create_item,
        handlers::inventory::update_item,
        handlers::inventory::delete_item,
        handlers::inventory::bulk_delete_items,
        handlers::inventory::get_reorder_alerts,

        // --- Operations ---
        handlers::operations::get_all_job_orders,
        handlers::operations::create_job_order,
        handlers::operations::update_job_order,
        handlers::operations::delete_job_order,

        // --- CRM ---
        handlers::crm::get_all_customers,
        handlers::crm::create_customer,
        handlers::crm::update_customer,
        handlers::crm::delete_customer,
        handlers::crm::get_all_vehicles,
        handlers::crm::create_vehicle,
        handlers::crm::update_vehicle,
        handlers::crm::delete_vehicle,

        // --- Accounts ---
        handlers::accounting::get_all_vouchers,
        handlers::accounting::create_voucher,
        handlers::accounting::delete_voucher,
        handlers::accounting::get_all_entries,
        handlers::accounting::create_entry,
        handlers::accounting::delete_entry,
        handlers::accounting::get_statement,
        handlers::accounting::get_trial_balance,
        handlers::accounting::get_profit_loss,
        handlers::accounting::get_balance_sheet,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::LoginPayload,
            models::auth::AuthResponse,
            models::auth::CreateUserPayload,
            models::auth::UpdateUserPayload,

            // --- Branches ---
            models::branch::Branch,
            models::branch::CreateBranchPayload,
            models::branch::UpdateBranchPayload,

            // --- Inventory ---
            models::inventory::Item,
            models::inventory::CreateItemPayload,
            models::inventory::UpdateItemPayload,
            models::inventory::BulkDeletePayload,
            crate::services::stock_alerts::Urgency,
            crate::services::stock_alerts::Alert,
            crate::services::stock_alerts::AlertSummary,
            handlers::inventory::AlertFeedResponse,

            // --- Operations ---
            models::operations::JobStatus,
            models::operations::JobOrder,
            models::operations::CreateJobOrderPayload,
            models::operations::UpdateJobOrderPayload,

            // --- CRM ---
            models::crm::Customer,
            models::crm::CreateCustomerPayload,
            models::crm::UpdateCustomerPayload,
            models::crm::Vehicle,
            models::crm::CreateVehiclePayload,
            models::crm::UpdateVehiclePayload,

            // --- Accounts ---
            models::accounting::Voucher,
            models::accounting::CreateVoucherPayload,
            models::accounting::EntrySide,
            models::accounting::EntryCategory,
            models::accounting::LedgerEntry,
            models::accounting::CreateLedgerEntryPayload,
            models::accounting::LedgerLine,
            models::accounting::LedgerStatement,
            models::accounting::TrialBalanceRow,
            models::accounting::TrialBalanceReport,
            models::accounting::ProfitLossReport,
            models::accounting::BalanceSheetReport,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e sessão"),
        (name = "Users", description = "Administração de usuários"),
        (name = "Branches", description = "Administração de filiais"),
        (name = "Inventory", description = "Estoque e alertas de reposição"),
        (name = "Operations", description = "Ordens de serviço"),
        (name = "CRM", description = "Veículos e clientes"),
        (name = "Accounts", description = "Contabilidade básica"),
        (name = "Dashboard", description = "Painel por papel")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
