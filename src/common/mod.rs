//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Log level parsing
//! - Logging setup
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
