//! Browser control module.
//!
//! Provides:
//! - Session acquisition and guaranteed release
//! - Fixed-interval polling waits over the DOM

pub mod session;
pub mod wait;

pub use session::Session;
