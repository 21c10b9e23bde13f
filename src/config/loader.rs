//! Configuration record and key/value file loading.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default port the chromedriver child process listens on.
pub const DEFAULT_DRIVER_PORT: u16 = 9515;

/// Runtime configuration.
///
/// Loaded from an env-file style key/value file (keys case-insensitive),
/// optionally overridden by CLI arguments. Passed explicitly to every
/// component that needs it; there is no process-wide configuration state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal base URL, e.g. `https://www.fer.unizg.hr`.
    pub fer: String,

    /// Portal username, also used for direct-link basic auth.
    pub username: String,

    /// Portal password, also used for direct-link basic auth.
    pub password: String,

    /// Chromium/Chrome browser binary.
    pub chrome_path: PathBuf,

    /// Chromedriver binary.
    pub driver_path: PathBuf,

    /// Staging directory the browser saves downloads into.
    pub incomplete_downloads: PathBuf,

    /// Root of the mirrored materials tree.
    pub destination: PathBuf,

    /// Port for the spawned chromedriver process.
    pub driver_port: u16,

    /// Whether to print per-item download output (`--quiet` disables).
    pub show_downloads: bool,
}

impl Config {
    /// Load configuration from a key/value file.
    ///
    /// Keys are matched case-insensitively; `incomplete_downloads` and
    /// `destination` are normalized to absolute paths.
    pub fn load(path: &Path) -> Result<Self> {
        let iter = dotenvy::from_path_iter(path).map_err(|e| {
            Error::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let mut values = HashMap::new();
        for item in iter {
            let (key, value) =
                item.map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
            values.insert(key.to_lowercase(), value);
        }

        Self::from_values(values)
    }

    /// Load configuration from the first existing file among `paths`.
    pub fn discover(paths: &[PathBuf]) -> Result<Self> {
        for path in paths {
            if path.is_file() {
                tracing::debug!("Loading configuration from {}", path.display());
                return Self::load(path);
            }
        }

        Err(Error::Config(format!(
            "No configuration file found (looked for: {})",
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }

    /// Build a config from already-lowercased key/value pairs.
    pub fn from_values(mut values: HashMap<String, String>) -> Result<Self> {
        let mut take = |key: &str| -> Result<String> {
            values
                .remove(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::MissingConfig(key.to_string()))
        };

        let fer = take("fer")?;
        let username = take("username")?;
        let password = take("password")?;
        let chrome_path = PathBuf::from(take("chrome_path")?);
        let driver_path = PathBuf::from(take("driver_path")?);
        let incomplete_downloads = absolutize(PathBuf::from(take("incomplete_downloads")?))?;
        let destination = absolutize(PathBuf::from(take("destination")?))?;

        let driver_port = match values.remove("driver_port") {
            Some(port) => port.parse().map_err(|_| Error::ConfigValidation {
                field: "driver_port".to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?,
            None => DEFAULT_DRIVER_PORT,
        };

        Ok(Self {
            fer,
            username,
            password,
            chrome_path,
            driver_path,
            incomplete_downloads,
            destination,
            driver_port,
            show_downloads: true,
        })
    }

    /// WebDriver endpoint of the spawned chromedriver process.
    pub fn driver_url(&self) -> String {
        format!("http://localhost:{}", self.driver_port)
    }
}

/// Resolve a possibly-relative path against the current working directory.
pub(crate) fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
