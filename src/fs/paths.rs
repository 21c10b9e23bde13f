//! Destination tree layout.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Subdirectory of each course holding its materials, mirroring the portal.
pub const MATERIALS_DIR: &str = "materijali";

/// Materials directory for a course: `destination/<course name>/materijali`.
pub fn course_materials_dir(config: &Config, course_name: &str) -> PathBuf {
    config.destination.join(course_name).join(MATERIALS_DIR)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_config() -> Config {
        Config {
            fer: "https://www.fer.unizg.hr".to_string(),
            username: "student".to_string(),
            password: "secret".to_string(),
            chrome_path: PathBuf::from("/usr/bin/chromium"),
            driver_path: PathBuf::from("/usr/bin/chromedriver"),
            incomplete_downloads: PathBuf::from("/tmp/staging"),
            destination: PathBuf::from("/materials"),
            driver_port: 9515,
            show_downloads: true,
        }
    }

    #[test]
    fn test_course_materials_dir() {
        let config = make_test_config();
        assert_eq!(
            course_materials_dir(&config, "Mathematics 2"),
            PathBuf::from("/materials/Mathematics 2/materijali")
        );
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
