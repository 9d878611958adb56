// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    models::auth::User,
    services::access_policy::{self, Principal},
};

/// 1. O Trait que define o que é um Recurso protegido
pub trait ResourceDef: Send + Sync + 'static {
    fn key() -> &'static str;
}

/// 2. O Extractor (Guardião)
// A decisão é puramente em memória: a tabela papel x recurso mora na
// política de acesso, não no banco.
pub struct RequireAccess<R>(pub PhantomData<R>);

impl<R, S> FromRequestParts<S> for RequireAccess<R>
where
    R: ResourceDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A. Extrai o usuário que o auth_guard injetou
        let user = parts.extensions.get::<User>().ok_or(AppError::InvalidToken)?;

        let principal = Principal {
            user_id: user.id,
            role: user.role.clone(),
        };
        if !access_policy::is_authenticated(Some(&principal)) {
            return Err(AppError::InvalidToken);
        }

        // B. Consulta a política; papel desconhecido nega sem erro
        if !access_policy::is_allowed(&principal.role, R::key()) {
            return Err(AppError::Forbidden(R::key().to_string()));
        }

        Ok(RequireAccess(PhantomData))
    }
}

// ---
// DEFINIÇÃO DOS RECURSOS (TIPOS)
// ---

pub struct ResInventory;
impl ResourceDef for ResInventory {
    fn key() -> &'static str {
        "inventory.manage"
    }
}

pub struct ResVehicleCustomer;
impl ResourceDef for ResVehicleCustomer {
    fn key() -> &'static str {
        "vehicle_customer.manage"
    }
}

pub struct ResAccounts;
impl ResourceDef for ResAccounts {
    fn key() -> &'static str {
        "accounts.manage"
    }
}

pub struct ResUsers;
impl ResourceDef for ResUsers {
    fn key() -> &'static str {
        "users.manage"
    }
}

pub struct ResBranches;
impl ResourceDef for ResBranches {
    fn key() -> &'static str {
        "branches.manage"
    }
}
