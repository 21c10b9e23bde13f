//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{loader::absolutize, Config};
use crate::error::Result;

/// FER course materials downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "fer-materials",
    version,
    about = "Download course materials from the FER intranet",
    long_about = "Drives a Chromium browser through the FER intranet login, lists the \
                  enrolled courses, and mirrors each course's materials to local disk.\n\n\
                  Folders are downloaded as server-prepared zip archives and extracted; \
                  plain files are fetched directly over authenticated HTTP."
)]
pub struct Args {
    /// Path to the key/value configuration file.
    /// Defaults to the first existing of `.env`, `.example.env`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Portal base URL.
    #[arg(long)]
    pub portal: Option<String>,

    /// Portal username.
    #[arg(short, long, env = "FER_USERNAME")]
    pub username: Option<String>,

    /// Portal password.
    #[arg(short, long, env = "FER_PASSWORD")]
    pub password: Option<String>,

    /// Chromium/Chrome browser binary.
    #[arg(long = "chrome-path")]
    pub chrome_path: Option<PathBuf>,

    /// Chromedriver binary.
    #[arg(long = "driver-path")]
    pub driver_path: Option<PathBuf>,

    /// Port for the spawned chromedriver process.
    #[arg(long = "driver-port")]
    pub driver_port: Option<u16>,

    /// Staging directory for in-flight browser downloads.
    #[arg(long)]
    pub staging: Option<PathBuf>,

    /// Root directory of the mirrored materials tree.
    #[arg(short = 'd', long)]
    pub destination: Option<PathBuf>,

    /// Hide per-item download output.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Configuration file candidates, in order of preference.
    pub fn config_paths(&self) -> Vec<PathBuf> {
        match &self.config {
            Some(path) => vec![path.clone()],
            None => vec![PathBuf::from(".env"), PathBuf::from(".example.env")],
        }
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) -> Result<()> {
        if let Some(portal) = self.portal {
            config.fer = portal;
        }

        if let Some(username) = self.username {
            config.username = username;
        }

        if let Some(password) = self.password {
            config.password = password;
        }

        if let Some(chrome_path) = self.chrome_path {
            config.chrome_path = chrome_path;
        }

        if let Some(driver_path) = self.driver_path {
            config.driver_path = driver_path;
        }

        if let Some(driver_port) = self.driver_port {
            config.driver_port = driver_port;
        }

        if let Some(staging) = self.staging {
            config.incomplete_downloads = absolutize(staging)?;
        }

        if let Some(destination) = self.destination {
            config.destination = absolutize(destination)?;
        }

        if self.quiet {
            config.show_downloads = false;
        }

        Ok(())
    }
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
            destination: PathBuf::from("/tmp/materials"),
            driver_port: 9515,
            show_downloads: true,
        }
    }

    #[test]
    fn test_merge_overrides_only_given_fields() {
        let args = Args::parse_from([
            "fer-materials",
            "--username",
            "override",
            "--driver-port",
            "4444",
        ]);

        let mut config = make_test_config();
        args.merge_into_config(&mut config).unwrap();

        assert_eq!(config.username, "override");
        assert_eq!(config.driver_port, 4444);
        assert_eq!(config.password, "secret");
        assert_eq!(config.fer, "https://www.fer.unizg.hr");
    }

    #[test]
    fn test_quiet_disables_per_item_output() {
        let args = Args::parse_from(["fer-materials", "--quiet"]);
        let mut config = make_test_config();
        args.merge_into_config(&mut config).unwrap();
        assert!(!config.show_downloads);

        let args = Args::parse_from(["fer-materials"]);
        let mut config = make_test_config();
        args.merge_into_config(&mut config).unwrap();
        assert!(config.show_downloads);
    }

    #[test]
    fn test_config_path_candidates() {
        let args = Args::parse_from(["fer-materials"]);
        assert_eq!(
            args.config_paths(),
            vec![PathBuf::from(".env"), PathBuf::from(".example.env")]
        );

        let args = Args::parse_from(["fer-materials", "--config", "custom.env"]);
        assert_eq!(args.config_paths(), vec![PathBuf::from("custom.env")]);
    }

    #[test]
    fn test_cli_paths_become_absolute() {
        let args = Args::parse_from(["fer-materials", "--staging", "staging", "-d", "materials"]);

        let mut config = make_test_config();
        args.merge_into_config(&mut config).unwrap();

        assert!(config.incomplete_downloads.is_absolute());
        assert!(config.destination.is_absolute());
    }
}
