//! Configuration validation logic.

use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_portal_url(&config.fer)?;

    if config.username.trim().is_empty() {
        return Err(Error::MissingConfig("username".to_string()));
    }

    if config.password.trim().is_empty() {
        return Err(Error::MissingConfig("password".to_string()));
    }

    if config.incomplete_downloads == config.destination {
        return Err(Error::ConfigValidation {
            field: "incomplete_downloads".to_string(),
            message: "Staging directory must differ from the destination directory".to_string(),
        });
    }

    Ok(())
}

/// Validate the portal base URL.
pub fn validate_portal_url(portal: &str) -> Result<()> {
    let url = Url::parse(portal).map_err(|e| Error::ConfigValidation {
        field: "fer".to_string(),
        message: format!("'{}' is not a valid URL: {}", portal, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "fer".to_string(),
            message: format!("Unsupported URL scheme '{}'", url.scheme()),
        });
    }

    if portal.ends_with('/') {
        return Err(Error::ConfigValidation {
            field: "fer".to_string(),
            message: "Portal URL must not end with a slash (course URLs are portal-relative)"
                .to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_test_config() -> Config {
        Config {
            fer: "https://www.fer.unizg.hr".to_string(),
            username: "student".to_string(),
            password: "secret".to_string(),
            chrome_path: PathBuf::from("/usr/bin/chromium"),
            driver_path: PathBuf::from("/usr/bin/chromedriver"),
            incomplete_downloads: PathBuf::from("/tmp/staging"),
            destination: PathBuf::from("/tmp/materials"),
            driver_port: 9515,
            show_downloads: true,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&make_test_config()).is_ok());
    }

    #[test]
    fn test_invalid_portal_url() {
        assert!(validate_portal_url("not a url").is_err());
        assert!(validate_portal_url("ftp://fer.unizg.hr").is_err());
        assert!(validate_portal_url("https://www.fer.unizg.hr/").is_err());
        assert!(validate_portal_url("https://www.fer.unizg.hr").is_ok());
    }

    #[test]
    fn test_staging_must_differ_from_destination() {
        let mut config = make_test_config();
        config.destination = config.incomplete_downloads.clone();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_blank_credentials() {
        let mut config = make_test_config();
        config.password = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
