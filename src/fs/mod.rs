//! Filesystem module.
//!
//! Provides destination tree layout helpers.

pub mod paths;

pub use paths::{course_materials_dir, ensure_dir, MATERIALS_DIR};
