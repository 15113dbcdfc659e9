//! Client SDK and command-line tool for the Nebula BaaS API.
//!
//! [`NebulaClient`] holds the base URL, timeout and bearer token. Resource
//! services borrow it: [`NebulaClient::auth`], [`NebulaClient::databases`],
//! [`NebulaClient::tables`] and [`NebulaClient::records`].
//!
//! Failures are reported as [`AppError`]; compare them against an
//! [`ErrorKind`] with [`AppError::is`].

pub use crate::api::client::NebulaClient;
pub use crate::api::config::ClientConfig;
pub use crate::api::models::{ColumnDefinition, Record, SchemaPayload, UpdateRecordResponse};
pub use crate::core::services::types::ListRecordsOptions;
pub use crate::error::{ApiError, AppError, ErrorKind};

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Resource services
pub mod storage; // Configuration profiles

/// Support modules (used across layers)
pub mod api; // Nebula HTTP client
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
