// src/db/user_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::auth::{UpdateUserPayload, User},
};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
        branch_id: Option<i32>,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, role, branch_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(branch_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Converte a violação de chave única em um erro mais amigável
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            AppError::DatabaseError(e)
        })
    }

    // Atualização parcial: campo ausente mantém o valor atual. A senha já
    // chega hasheada (quando veio no payload).
    pub async fn update(
        &self,
        id: i32,
        payload: &UpdateUserPayload,
        new_password_hash: Option<String>,
    ) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                password_hash = COALESCE($4, password_hash), \
                role = COALESCE($5, role), \
                branch_id = COALESCE($6, branch_id), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(payload.name.as_deref())
        .bind(payload.email.as_deref())
        .bind(new_password_hash)
        .bind(payload.role.as_deref())
        .bind(payload.branch_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            AppError::DatabaseError(e)
        })
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
