// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::services::access_policy::Role;

// Representa um usuário vindo do banco de dados.
// O papel fica como String crua: quem interpreta (e nega o que não conhece)
// é a política de acesso, nunca o model.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,

    #[schema(example = "Maria Souza")]
    pub name: String,

    #[schema(example = "maria@oficina.com")]
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: String,

    #[schema(example = "technician")]
    pub role: String,

    pub branch_id: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "maria@oficina.com")]
    pub email: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
}

// Resposta de autenticação: token + usuário (o frontend guarda os dois)
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,   // Subject (ID do usuário)
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

// Criação de usuário (ação de administrador, não auto-registro)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,

    #[validate(custom(function = "validate_role"))]
    #[schema(example = "receptionist")]
    pub role: String,

    pub branch_id: Option<i32>,
}

// Atualização parcial: só os campos enviados são trocados.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    // Senha só é re-hasheada se vier preenchida.
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: Option<String>,

    pub role: Option<String>,

    pub branch_id: Option<i32>,
}

impl UpdateUserPayload {
    // O validator não roda custom em Option, então validamos o papel à mão.
    pub fn validate_role_if_present(&self) -> Result<(), ValidationError> {
        match &self.role {
            Some(role) => validate_role(role),
            None => Ok(()),
        }
    }
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if Role::parse(role).is_some() {
        return Ok(());
    }
    let mut err = ValidationError::new("unknown_role");
    err.message = Some("Papel desconhecido.".into());
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejeita_papel_desconhecido_na_criacao() {
        let payload: CreateUserPayload = serde_json::from_value(serde_json::json!({
            "name": "Fulano",
            "email": "fulano@oficina.com",
            "password": "segredo1",
            "role": "hacker"
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn aceita_todos_os_papeis_enumerados() {
        for role in [
            "super_admin",
            "admin",
            "manager",
            "branch_manager",
            "cashier",
            "technician",
            "accountant",
            "receptionist",
        ] {
            assert!(validate_role(role).is_ok(), "papel {} deveria ser aceito", role);
        }
    }

    #[test]
    fn atualizacao_sem_papel_passa_na_checagem_manual() {
        let payload: UpdateUserPayload =
            serde_json::from_value(serde_json::json!({ "name": "Novo Nome" })).unwrap();
        assert!(payload.validate_role_if_present().is_ok());
    }
}
