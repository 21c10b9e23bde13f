//! Direct-link fetching module.
//!
//! Provides the authenticated streaming GET used for non-folder materials.

pub mod client;

pub use client::fetch_to_file;
