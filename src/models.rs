pub mod accounting;
pub mod auth;
pub mod branch;
pub mod crm;
pub mod dashboard;
pub mod inventory;
pub mod operations;
