//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Parsing of CLI-provided records, filters and schema columns
pub mod input;

/// Verbose output for the CLI
pub mod logging;

/// Input validation shared by the client and services
pub mod validation;
