//! Shared types, errors, and configuration for the garrison records core.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Record-type and source-identity newtypes
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::CoreConfig;
pub use error::{AppError, AppResult};
