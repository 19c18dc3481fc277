//! CostMap core
//!
//! Entity store, validation, and record services for the home-building
//! cost-mapping configuration workflow: Model → Exterior → Option → Cost
//! Item, plus the flat IFP key mapping and the global location registry.

pub mod auth;
pub mod infrastructure;
pub mod services;

pub use infrastructure::database::Database;
pub use sea_orm::DatabaseConnection;
