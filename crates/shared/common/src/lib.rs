//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling for the store and HTTP boundary
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, ErrorResponse, StoreError, StoreResult};
