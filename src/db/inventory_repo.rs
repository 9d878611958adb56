// src/db/inventory_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::inventory::{CreateItemPayload, Item, UpdateItemPayload},
};

#[derive(Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Funções de "Leitura" (Getters)
    // ---

    pub async fn get_all_items(&self) -> Result<Vec<Item>, AppError> {
        let items = sqlx::query_as::<_, Item>("SELECT * FROM items ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    // Na mesma ordem de cadastro: é a ordem que a lista de alertas preserva.
    pub async fn get_items_by_insertion(&self) -> Result<Vec<Item>, AppError> {
        let items = sqlx::query_as::<_, Item>("SELECT * FROM items ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    // ---
    // Funções de "Escrita"
    // ---

    pub async fn create_item(&self, payload: &CreateItemPayload) -> Result<Item, AppError> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, category, company, supplier, unit, quantity, min_stock, last_ordered) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&payload.name)
        .bind(payload.category.as_deref())
        .bind(payload.company.as_deref())
        .bind(payload.supplier.as_deref())
        .bind(payload.unit.as_deref())
        .bind(payload.quantity)
        .bind(payload.min_stock)
        .bind(payload.last_ordered)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    pub async fn update_item(
        &self,
        id: i32,
        payload: &UpdateItemPayload,
    ) -> Result<Option<Item>, AppError> {
        let item = sqlx::query_as::<_, Item>(
            "UPDATE items SET \
                name = COALESCE($2, name), \
                category = COALESCE($3, category), \
                company = COALESCE($4, company), \
                supplier = COALESCE($5, supplier), \
                unit = COALESCE($6, unit), \
                quantity = COALESCE($7, quantity), \
                min_stock = COALESCE($8, min_stock), \
                last_ordered = COALESCE($9, last_ordered), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(payload.name.as_deref())
        .bind(payload.category.as_deref())
        .bind(payload.company.as_deref())
        .bind(payload.supplier.as_deref())
        .bind(payload.unit.as_deref())
        .bind(payload.quantity)
        .bind(payload.min_stock)
        .bind(payload.last_ordered)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    pub async fn delete_item(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // Exclusão em massa; retorna quantos realmente saíram.
    pub async fn delete_items(&self, ids: &[i32]) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
