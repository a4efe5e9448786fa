//! Photogal Core Library
//!
//! This crate provides the domain models, error types, constants, and
//! telemetry setup shared across all Photogal components.

pub mod constants;
pub mod error;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{FilterRecord, ImageProcessingOptions};
