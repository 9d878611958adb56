// src/db/crm_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::crm::{
        CreateCustomerPayload, CreateVehiclePayload, Customer, UpdateCustomerPayload,
        UpdateVehiclePayload, Vehicle,
    },
};

// Clientes e veículos moram juntos: a tela de "Veículos e Clientes" trata
// os dois como um módulo só.
#[derive(Clone)]
pub struct CrmRepository {
    pool: PgPool,
}

impl CrmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Clientes
    // ---

    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(customers)
    }

    pub async fn create_customer(
        &self,
        payload: &CreateCustomerPayload,
    ) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers \
                (name, contact, email, address, preferred_communication, preferred_package, \
                 oil_brand, tire_type, loyalty_points) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&payload.name)
        .bind(payload.contact.as_deref())
        .bind(payload.email.as_deref())
        .bind(payload.address.as_deref())
        .bind(payload.preferred_communication.as_deref())
        .bind(payload.preferred_package.as_deref())
        .bind(payload.oil_brand.as_deref())
        .bind(payload.tire_type.as_deref())
        .bind(payload.loyalty_points)
        .fetch_one(&self.pool)
        .await?;
        Ok(customer)
    }

    pub async fn update_customer(
        &self,
        id: i32,
        payload: &UpdateCustomerPayload,
    ) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "UPDATE customers SET \
                name = COALESCE($2, name), \
                contact = COALESCE($3, contact), \
                email = COALESCE($4, email), \
                address = COALESCE($5, address), \
                preferred_communication = COALESCE($6, preferred_communication), \
                preferred_package = COALESCE($7, preferred_package), \
                oil_brand = COALESCE($8, oil_brand), \
                tire_type = COALESCE($9, tire_type), \
                loyalty_points = COALESCE($10, loyalty_points), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(payload.name.as_deref())
        .bind(payload.contact.as_deref())
        .bind(payload.email.as_deref())
        .bind(payload.address.as_deref())
        .bind(payload.preferred_communication.as_deref())
        .bind(payload.preferred_package.as_deref())
        .bind(payload.oil_brand.as_deref())
        .bind(payload.tire_type.as_deref())
        .bind(payload.loyalty_points)
        .fetch_optional(&self.pool)
        .await?;
        Ok(customer)
    }

    pub async fn delete_customer(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ---
    // Veículos
    // ---

    pub async fn get_all_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY make ASC, model ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(vehicles)
    }

    pub async fn create_vehicle(
        &self,
        payload: &CreateVehiclePayload,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "INSERT INTO vehicles \
                (make, model, vin, reg_no, year, odometer, engine_no, chassis_no, customer_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&payload.make)
        .bind(&payload.model)
        .bind(payload.vin.as_deref())
        .bind(payload.reg_no.as_deref())
        .bind(payload.year)
        .bind(payload.odometer)
        .bind(payload.engine_no.as_deref())
        .bind(payload.chassis_no.as_deref())
        .bind(payload.customer_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(vehicle)
    }

    pub async fn update_vehicle(
        &self,
        id: i32,
        payload: &UpdateVehiclePayload,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET \
                make = COALESCE($2, make), \
                model = COALESCE($3, model), \
                vin = COALESCE($4, vin), \
                reg_no = COALESCE($5, reg_no), \
                year = COALESCE($6, year), \
                odometer = COALESCE($7, odometer), \
                engine_no = COALESCE($8, engine_no), \
                chassis_no = COALESCE($9, chassis_no), \
                customer_id = COALESCE($10, customer_id), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(payload.make.as_deref())
        .bind(payload.model.as_deref())
        .bind(payload.vin.as_deref())
        .bind(payload.reg_no.as_deref())
        .bind(payload.year)
        .bind(payload.odometer)
        .bind(payload.engine_no.as_deref())
        .bind(payload.chassis_no.as_deref())
        .bind(payload.customer_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vehicle)
    }

    pub async fn delete_vehicle(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
