//! Portal interaction module.
//!
//! Provides:
//! - Login form submission
//! - Course enumeration

pub mod auth;
pub mod courses;

pub use auth::{await_intranet, login};
pub use courses::{list_courses, parse_course_list, Course};
