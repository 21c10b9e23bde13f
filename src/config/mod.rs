//! Configuration module for fer-materials.
//!
//! This module handles:
//! - Loading configuration from env-file style key/value files
//! - CLI argument merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, DEFAULT_DRIVER_PORT};
pub use validation::validate_config;
