//! Polling waits over the browser DOM.
//!
//! The single retry/failure primitive of the whole program: poll a CSS
//! selector at a fixed interval until the condition holds or the timeout
//! elapses. No event loop, no notifications from the browser.

use std::time::{Duration, Instant};

use thirtyfour::prelude::*;

use crate::error::{Error, Result};

/// Default wait budget for any DOM condition.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default fixed polling interval.
pub const DEFAULT_POLL: Duration = Duration::from_millis(500);

fn timeout_error(css: &str, timeout: Duration) -> Error {
    Error::WaitTimeout {
        selector: css.to_string(),
        secs: timeout.as_secs(),
    }
}

/// Wait until at least one element matches `css` and return it.
pub async fn present(
    driver: &WebDriver,
    css: &str,
    timeout: Duration,
    poll: Duration,
) -> Result<WebElement> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(element) = driver.find(By::Css(css)).await {
            return Ok(element);
        }
        if Instant::now() >= deadline {
            return Err(timeout_error(css, timeout));
        }
        tokio::time::sleep(poll).await;
    }
}

/// Wait until at least one element matches `css` and return all matches.
pub async fn all(
    driver: &WebDriver,
    css: &str,
    timeout: Duration,
    poll: Duration,
) -> Result<Vec<WebElement>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(elements) = driver.find_all(By::Css(css)).await {
            if !elements.is_empty() {
                return Ok(elements);
            }
        }
        if Instant::now() >= deadline {
            return Err(timeout_error(css, timeout));
        }
        tokio::time::sleep(poll).await;
    }
}

/// Wait until an element matching `css` is visible and enabled.
pub async fn clickable(
    driver: &WebDriver,
    css: &str,
    timeout: Duration,
    poll: Duration,
) -> Result<WebElement> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(element) = driver.find(By::Css(css)).await {
            if is_interactable(&element).await {
                return Ok(element);
            }
        }
        if Instant::now() >= deadline {
            return Err(timeout_error(css, timeout));
        }
        tokio::time::sleep(poll).await;
    }
}

/// Wait until a child of `parent` matching `css` is visible and enabled.
///
/// Scoped variant of [`clickable`] so a control can be matched inside a
/// specific list item rather than page-wide.
pub async fn clickable_within(
    parent: &WebElement,
    css: &str,
    timeout: Duration,
    poll: Duration,
) -> Result<WebElement> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(element) = parent.find(By::Css(css)).await {
            if is_interactable(&element).await {
                return Ok(element);
            }
        }
        if Instant::now() >= deadline {
            return Err(timeout_error(css, timeout));
        }
        tokio::time::sleep(poll).await;
    }
}

/// Wait until a frame matching `css` is attached, then switch the active
/// browsing context into it.
///
/// The caller is responsible for switching back with
/// `driver.enter_default_frame()` afterwards.
pub async fn frame_and_switch(
    driver: &WebDriver,
    css: &str,
    timeout: Duration,
    poll: Duration,
) -> Result<()> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(frame) = driver.find(By::Css(css)).await {
            // A frame found but not yet attached fails the switch; keep polling.
            if frame.enter_frame().await.is_ok() {
                return Ok(());
            }
        }
        if Instant::now() >= deadline {
            return Err(timeout_error(css, timeout));
        }
        tokio::time::sleep(poll).await;
    }
}

async fn is_interactable(element: &WebElement) -> bool {
    element.is_displayed().await.unwrap_or(false) && element.is_enabled().await.unwrap_or(false)
}
