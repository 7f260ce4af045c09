//! Error Handling utilities
//!
//! This module provides the client error taxonomy and its normalized payload.

pub mod error;

// Re-export commonly used types
pub use error::*;
