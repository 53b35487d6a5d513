//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types for the service envelope

pub mod error;

// Re-export commonly used items
pub use error::{ServiceError, ServiceResult};
