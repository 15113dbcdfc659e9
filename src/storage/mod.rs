//! Storage layer for the nebula CLI
//!
//! Handles the TOML configuration file with named server profiles.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
