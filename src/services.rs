// src/services.rs

pub mod access_policy;
pub mod accounting;
pub mod auth;
pub mod stock_alerts;
