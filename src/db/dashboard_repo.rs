// src/db/dashboard_repo.rs

use sqlx::PgPool;

use crate::common::error::AppError;

// Contagens agregadas que alimentam os cards do painel.
#[derive(Debug, Clone, Copy)]
pub struct DashboardCounts {
    pub items: i64,
    pub customers: i64,
    pub vehicles: i64,
    pub branches: i64,
    pub pending_job_orders: i64,
}

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Uma transação só, para um snapshot consistente das contagens.
    pub async fn get_counts(&self) -> Result<DashboardCounts, AppError> {
        let mut tx = self.pool.begin().await?;

        let (items,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(&mut *tx)
            .await?;
        let (customers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
            .fetch_one(&mut *tx)
            .await?;
        let (vehicles,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&mut *tx)
            .await?;
        let (branches,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM branches")
            .fetch_one(&mut *tx)
            .await?;
        let (pending_job_orders,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM job_orders WHERE status = 'pending'")
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(DashboardCounts {
            items,
            customers,
            vehicles,
            branches,
            pending_job_orders,
        })
    }
}
