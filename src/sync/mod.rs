//! Materials synchronization module.
//!
//! This module provides:
//! - The per-course download synchronizer
//! - Staging-directory completion polling
//! - Zip archive extraction
//! - Sync statistics

pub mod archive;
pub mod course;
pub mod staging;
pub mod state;

pub use course::sync_course;
pub use staging::{is_incomplete, is_settled, wait_for_downloads};
pub use state::{CourseStats, GlobalStats};
