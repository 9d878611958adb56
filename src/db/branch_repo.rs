// src/db/branch_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::branch::{Branch, CreateBranchPayload, UpdateBranchPayload},
};

#[derive(Clone)]
pub struct BranchRepository {
    pool: PgPool,
}

impl BranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<Branch>, AppError> {
        let branches = sqlx::query_as::<_, Branch>("SELECT * FROM branches ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(branches)
    }

    pub async fn create(&self, payload: &CreateBranchPayload) -> Result<Branch, AppError> {
        let branch = sqlx::query_as::<_, Branch>(
            "INSERT INTO branches (name, address, contact, manager) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.contact)
        .bind(&payload.manager)
        .fetch_one(&self.pool)
        .await?;
        Ok(branch)
    }

    pub async fn update(
        &self,
        id: i32,
        payload: &UpdateBranchPayload,
    ) -> Result<Option<Branch>, AppError> {
        let branch = sqlx::query_as::<_, Branch>(
            "UPDATE branches SET \
                name = COALESCE($2, name), \
                address = COALESCE($3, address), \
                contact = COALESCE($4, contact), \
                manager = COALESCE($5, manager), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(payload.name.as_deref())
        .bind(payload.address.as_deref())
        .bind(payload.contact.as_deref())
        .bind(payload.manager.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(branch)
    }

    // Usuários da filial ficam com branch_id nulo (ON DELETE SET NULL).
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
