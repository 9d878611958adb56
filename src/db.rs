// src/db.rs

pub mod accounting_repo;
pub mod branch_repo;
pub mod crm_repo;
pub mod dashboard_repo;
pub mod inventory_repo;
pub mod operations_repo;
pub mod user_repo;

pub use accounting_repo::AccountingRepository;
pub use branch_repo::BranchRepository;
pub use crm_repo::CrmRepository;
pub use dashboard_repo::DashboardRepository;
pub use inventory_repo::InventoryRepository;
pub use operations_repo::OperationsRepository;
pub use user_repo::UserRepository;
