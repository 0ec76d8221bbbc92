//! Configuration data structures.

/// Root configuration structure containing all settings.
pub mod configuration;
