pub mod auth_service;
pub mod config_service;
pub mod database_service;
pub mod record_service;
pub mod table_service;
pub mod types;
