//! Error types for the fer-materials application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Browser errors
    #[error("Browser error: {0}")]
    Browser(#[from] thirtyfour::error::WebDriverError),

    #[error("Failed to start browser driver: {0}")]
    DriverStartup(String),

    #[error("Timed out after {secs}s waiting for element '{selector}'")]
    WaitTimeout { selector: String, secs: u64 },

    // Download errors
    #[error("Timed out after {secs}s waiting for downloads to settle in {dir}")]
    DownloadTimeout { dir: String, secs: u64 },

    #[error("Expected {expected} staged download(s), found {found}")]
    UnexpectedDownloadCount { expected: usize, found: usize },

    #[error("Download failed: {0}")]
    Download(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Archive errors
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const BROWSER_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_COURSES_FAILED: i32 = 6;
}
