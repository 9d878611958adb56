//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rota pública + rotas de sessão protegidas
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .merge(
            Router::new()
                .route("/me", get(handlers::auth::get_me))
                .route("/logout", post(handlers::auth::logout))
                .layer(axum_middleware::from_fn_with_state(
                    app_state.clone(),
                    auth_guard,
                )),
        );

    let user_routes = Router::new()
        .route(
            "/",
            get(handlers::users::get_all_users).post(handlers::users::create_user),
        )
        .route(
            "/{id}",
            put(handlers::users::update_user).delete(handlers::users::delete_user),
        );

    let branch_routes = Router::new()
        .route(
            "/",
            get(handlers::branches::get_all_branches).post(handlers::branches::create_branch),
        )
        .route(
            "/{id}",
            put(handlers::branches::update_branch).delete(handlers::branches::delete_branch),
        );

    // Ordens de serviço moram sob /inventory, como na navegação da oficina.
    let inventory_routes = Router::new()
        .route(
            "/items",
            get(handlers::inventory::get_all_items).post(handlers::inventory::create_item),
        )
        .route(
            "/items/{id}",
            put(handlers::inventory::update_item).delete(handlers::inventory::delete_item),
        )
        .route("/items/bulk-delete", post(handlers::inventory::bulk_delete_items))
        .route("/reorder-alerts", get(handlers::inventory::get_reorder_alerts))
        .route(
            "/job-orders",
            get(handlers::operations::get_all_job_orders)
                .post(handlers::operations::create_job_order),
        )
        .route(
            "/job-orders/{id}",
            put(handlers::operations::update_job_order)
                .delete(handlers::operations::delete_job_order),
        );

    let crm_routes = Router::new()
        .route(
            "/customers",
            get(handlers::crm::get_all_customers).post(handlers::crm::create_customer),
        )
        .route(
            "/customers/{id}",
            put(handlers::crm::update_customer).delete(handlers::crm::delete_customer),
        )
        .route(
            "/vehicles",
            get(handlers::crm::get_all_vehicles).post(handlers::crm::create_vehicle),
        )
        .route(
            "/vehicles/{id}",
            put(handlers::crm::update_vehicle).delete(handlers::crm::delete_vehicle),
        );

    let accounting_routes = Router::new()
        .route(
            "/vouchers",
            get(handlers::accounting::get_all_vouchers).post(handlers::accounting::create_voucher),
        )
        .route("/vouchers/{id}", axum::routing::delete(handlers::accounting::delete_voucher))
        .route(
            "/ledger",
            get(handlers::accounting::get_all_entries).post(handlers::accounting::create_entry),
        )
        .route("/ledger/{id}", axum::routing::delete(handlers::accounting::delete_entry))
        .route(
            "/ledger/statement/{account}",
            get(handlers::accounting::get_statement),
        )
        .route("/trial-balance", get(handlers::accounting::get_trial_balance))
        .route("/profit-loss", get(handlers::accounting::get_profit_loss))
        .route("/balance-sheet", get(handlers::accounting::get_balance_sheet));

    let dashboard_routes = Router::new().route("/", get(handlers::dashboard::get_summary));

    // Tudo abaixo exige token; o recurso exato é checado pelo guardião de
    // cada handler (RequireAccess).
    let protected = Router::new()
        .nest("/api/users", user_routes)
        .nest("/api/branches", branch_routes)
        .nest("/api/inventory", inventory_routes)
        .nest("/api/vehicle-customer", crm_routes)
        .nest("/api/accounts", accounting_routes)
        .nest("/api/dashboard", dashboard_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .merge(protected)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
