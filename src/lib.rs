//! FER Materials - course material downloader for the FER intranet
//!
//! This library drives a Chromium browser through the portal's login form,
//! enumerates the enrolled courses, and mirrors each course's materials to
//! local disk.
//!
//! # Features
//!
//! - Username/password login via the portal's login form
//! - Course enumeration from the intranet landing page
//! - Folder downloads as server-prepared zip archives, extracted locally
//! - Direct-link file downloads over authenticated HTTP
//! - Destination layout mirroring the portal's course/folder structure
//!
//! # Example
//!
//! ```no_run
//! use fer_materials::{browser::Session, portal, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::discover(&[".env".into(), ".example.env".into()])?;
//!     let session = Session::acquire(&config).await?;
//!     portal::login(&session, &config).await?;
//!     let courses = portal::list_courses(&session).await?;
//!     session.release().await;
//!
//!     println!("{} enrolled courses", courses.len());
//!     Ok(())
//! }
//! ```

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod fs;
pub mod output;
pub mod portal;
pub mod sync;

// Re-exports for convenience
pub use browser::Session;
pub use config::Config;
pub use error::{Error, Result};
pub use portal::Course;
pub use sync::{sync_course, CourseStats, GlobalStats};
