//! Browser session acquisition and release.
//!
//! Spawns the chromedriver binary as a child process and connects a
//! WebDriver session to it, configured to drop downloads into the staging
//! directory without prompting.

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use thirtyfour::prelude::*;
use thirtyfour::{ChromeCapabilities, ChromiumLikeCapabilities, DesiredCapabilities};

use crate::config::Config;
use crate::error::{Error, Result};

/// Budget for chromedriver to start accepting connections.
const STARTUP_TIMEOUT: Duration = Duration::from_secs(20);

/// Polling interval while connecting to a freshly spawned chromedriver.
const STARTUP_POLL: Duration = Duration::from_millis(500);

/// A controlled browser instance.
///
/// Owns both the WebDriver session and the chromedriver child process.
/// [`Session::release`] must run on every exit path; dropping the session
/// still kills the child process as a backstop.
pub struct Session {
    driver: WebDriver,
    chromedriver: Child,
}

impl Session {
    /// Start chromedriver, launch the browser, and connect.
    ///
    /// Ensures the staging directory exists and configures the browser to
    /// auto-save downloads into it. Extensions and GPU acceleration are
    /// disabled (startup stability, not behavior).
    pub async fn acquire(config: &Config) -> Result<Self> {
        tokio::fs::create_dir_all(&config.incomplete_downloads).await?;

        let mut caps = DesiredCapabilities::chrome();
        caps.set_binary(&config.chrome_path.to_string_lossy())?;
        caps.add_arg("--disable-extensions")?;
        caps.add_arg("--disable-gpu")?;
        caps.add_experimental_option(
            "prefs",
            serde_json::json!({
                "download.default_directory": config.incomplete_downloads.to_string_lossy(),
                "download.prompt_for_download": false,
            }),
        )?;

        let mut chromedriver = Command::new(&config.driver_path)
            .arg(format!("--port={}", config.driver_port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::DriverStartup(format!("{}: {}", config.driver_path.display(), e))
            })?;

        tracing::debug!(
            "Spawned chromedriver (pid {}) on port {}",
            chromedriver.id(),
            config.driver_port
        );

        let driver = match connect(&config.driver_url(), caps).await {
            Ok(driver) => driver,
            Err(e) => {
                let _ = chromedriver.kill();
                return Err(e);
            }
        };

        Ok(Self {
            driver,
            chromedriver,
        })
    }

    /// Handle to the underlying WebDriver session.
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// Navigate the browser to `url`.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    /// Quit the browser and terminate the chromedriver child process.
    pub async fn release(mut self) {
        if let Err(e) = self.driver.clone().quit().await {
            tracing::warn!("Failed to quit browser cleanly: {}", e);
        }
        let _ = self.chromedriver.kill();
        let _ = self.chromedriver.wait();
        tracing::info!("Browser session released");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Backstop in case release() was never reached.
        let _ = self.chromedriver.kill();
    }
}

/// Connect to chromedriver, retrying until it accepts or the budget expires.
async fn connect(server_url: &str, caps: ChromeCapabilities) -> Result<WebDriver> {
    let deadline = Instant::now() + STARTUP_TIMEOUT;
    loop {
        match WebDriver::new(server_url, caps.clone()).await {
            Ok(driver) => return Ok(driver),
            Err(e) => {
                if Instant::now() >= deadline {
                    return Err(Error::DriverStartup(format!("{}: {}", server_url, e)));
                }
                tokio::time::sleep(STARTUP_POLL).await;
            }
        }
    }
}
