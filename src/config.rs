// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        AccountingRepository, BranchRepository, CrmRepository, DashboardRepository,
        InventoryRepository, OperationsRepository, UserRepository,
    },
    services::auth::AuthService,
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub user_repo: UserRepository,
    pub branch_repo: BranchRepository,
    pub inventory_repo: InventoryRepository,
    pub crm_repo: CrmRepository,
    pub operations_repo: OperationsRepository,
    pub accounting_repo: AccountingRepository,
    pub dashboard_repo: DashboardRepository,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL deve ser definida"))?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET deve ser definido"))?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);

        Ok(Self {
            auth_service,
            user_repo,
            branch_repo: BranchRepository::new(db_pool.clone()),
            inventory_repo: InventoryRepository::new(db_pool.clone()),
            crm_repo: CrmRepository::new(db_pool.clone()),
            operations_repo: OperationsRepository::new(db_pool.clone()),
            accounting_repo: AccountingRepository::new(db_pool.clone()),
            dashboard_repo: DashboardRepository::new(db_pool.clone()),
            db_pool,
        })
    }
}
