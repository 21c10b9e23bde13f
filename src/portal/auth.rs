//! Portal login.

use crate::browser::wait::{self, DEFAULT_POLL, DEFAULT_TIMEOUT};
use crate::browser::Session;
use crate::config::Config;
use crate::error::Result;

/// Element that only exists once the user is logged in. Waiting on it is the
/// sole login verification: wrong credentials surface as this wait timing out.
const INTRANET_LANDMARK: &str = "a[href='/intranet']";

/// Fill and submit the portal's login form.
///
/// Does not verify the login itself; call [`await_intranet`] afterwards.
pub async fn login(session: &Session, config: &Config) -> Result<()> {
    session.goto(&format!("{}/login/", config.fer)).await?;
    tracing::info!("Opened {} login page", config.fer);

    let driver = session.driver();

    let username = wait::present(driver, "input#username", DEFAULT_TIMEOUT, DEFAULT_POLL).await?;
    username.send_keys(config.username.as_str()).await?;
    tracing::debug!("Entered username");

    let password = wait::present(driver, "input#password", DEFAULT_TIMEOUT, DEFAULT_POLL).await?;
    password.send_keys(config.password.as_str()).await?;
    tracing::debug!("Entered password");

    let submit = wait::present(driver, "button[type=submit]", DEFAULT_TIMEOUT, DEFAULT_POLL).await?;
    submit.click().await?;
    tracing::info!("Submitted login form");

    Ok(())
}

/// Wait for the post-login landmark, then open the intranet landing page.
pub async fn await_intranet(session: &Session, config: &Config) -> Result<()> {
    wait::present(
        session.driver(),
        INTRANET_LANDMARK,
        DEFAULT_TIMEOUT,
        DEFAULT_POLL,
    )
    .await?;
    session.goto(&format!("{}/intranet", config.fer)).await?;
    Ok(())
}
