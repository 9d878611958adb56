// src/db/operations_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::operations::{CreateJobOrderPayload, JobOrder, UpdateJobOrderPayload},
};

#[derive(Clone)]
pub struct OperationsRepository {
    pool: PgPool,
}

impl OperationsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_job_orders(&self) -> Result<Vec<JobOrder>, AppError> {
        let orders = sqlx::query_as::<_, JobOrder>("SELECT * FROM job_orders ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(orders)
    }

    pub async fn create_job_order(
        &self,
        payload: &CreateJobOrderPayload,
    ) -> Result<JobOrder, AppError> {
        let order = sqlx::query_as::<_, JobOrder>(
            "INSERT INTO job_orders \
                (customer, vehicle, service_type, status, assigned_bay, scheduled_time, technician) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&payload.customer)
        .bind(&payload.vehicle)
        .bind(&payload.service_type)
        .bind(payload.status)
        .bind(&payload.assigned_bay)
        .bind(&payload.scheduled_time)
        .bind(&payload.technician)
        .fetch_one(&self.pool)
        .await?;
        Ok(order)
    }

    pub async fn update_job_order(
        &self,
        id: i32,
        payload: &UpdateJobOrderPayload,
    ) -> Result<Option<JobOrder>, AppError> {
        let order = sqlx::query_as::<_, JobOrder>(
            "UPDATE job_orders SET \
                customer = COALESCE($2, customer), \
                vehicle = COALESCE($3, vehicle), \
                service_type = COALESCE($4, service_type), \
                status = COALESCE($5, status), \
                assigned_bay = COALESCE($6, assigned_bay), \
                scheduled_time = COALESCE($7, scheduled_time), \
                technician = COALESCE($8, technician), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(payload.customer.as_deref())
        .bind(payload.vehicle.as_deref())
        .bind(payload.service_type.as_deref())
        .bind(payload.status)
        .bind(payload.assigned_bay.as_deref())
        .bind(payload.scheduled_time.as_deref())
        .bind(payload.technician.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(order)
    }

    pub async fn delete_job_order(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM job_orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
