//! Core constants and error handling
//!
//! This module contains the fixed rewrite policy constants and the error
//! types used throughout the application.

pub mod constants;
pub mod error;

// Re-export commonly used items for convenience
pub use error::{Result, SiterelError};
