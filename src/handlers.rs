// src/handlers.rs

pub mod accounting;
pub mod auth;
pub mod branches;
pub mod crm;
pub mod dashboard;
pub mod inventory;
pub mod operations;
pub mod users;
