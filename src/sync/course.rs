//! Course materials synchronization.
//!
//! For one course: discover folder and file items on the materials page,
//! pull folders down as server-prepared zip archives via the browser, fetch
//! plain files over authenticated HTTP, and lay everything out under
//! `destination/<course name>/materijali/`.

use std::path::PathBuf;
use std::time::Duration;

use scraper::Html;
use thirtyfour::prelude::*;
use url::Url;

use crate::browser::wait::{self, DEFAULT_POLL, DEFAULT_TIMEOUT};
use crate::browser::Session;
use crate::config::Config;
use crate::error::Result;
use crate::fetch;
use crate::fs;
use crate::output::{print_info, print_warning};
use crate::portal::Course;
use crate::sync::archive::extract_zip;
use crate::sync::staging;
use crate::sync::state::CourseStats;

const MATERIALS_CONTAINER: &str = "#cms_area_middle";
const FOLDER_ITEM: &str = ".resultitemFolder";
const FILE_ITEM: &str = ".resultitemFile";
const ITEM_NAME: &str = ".name";
const ZIP_CONTROL: &str = ".downloadZipFile";
const PREPARE_FRAME: &str = "iframe";
const DIALOG_CLOSE: &str = ".ui-dialog-buttonset > button[type=button]";

/// Budget for the server to prepare a folder zip and the browser to finish
/// downloading it.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Download all materials for a course.
///
/// A folder whose zip never lands in the staging directory is fatal for the
/// course: the error propagates to the caller, which decides whether to
/// continue with the remaining courses.
pub async fn sync_course(
    session: &Session,
    client: &reqwest::Client,
    config: &Config,
    course: &Course,
) -> Result<CourseStats> {
    let mut stats = CourseStats::new(course.name.clone());

    print_info(&format!("Syncing materials for {}", course.name));
    session
        .goto(&format!("{}{}/materijali", config.fer, course.url))
        .await?;

    let container = wait::present(
        session.driver(),
        MATERIALS_CONTAINER,
        DEFAULT_TIMEOUT,
        DEFAULT_POLL,
    )
    .await?;
    let html = container.inner_html().await?;
    if fragment_is_empty(&html) {
        tracing::info!("No materials for {}", course.name);
        return Ok(stats);
    }

    sync_folders(session, config, course, &mut stats).await?;
    sync_files(session, client, config, course, &mut stats).await?;

    Ok(stats)
}

/// Whether a parsed fragment has no child nodes at all.
fn fragment_is_empty(html: &str) -> bool {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().children().next().is_none()
}

/// Folder branch: each folder is downloaded as a server-prepared zip.
async fn sync_folders(
    session: &Session,
    config: &Config,
    course: &Course,
    stats: &mut CourseStats,
) -> Result<()> {
    let driver = session.driver();

    let folders = driver.find_all(By::Css(FOLDER_ITEM)).await?;
    for folder in folders {
        let name = item_name(&folder).await?;
        if config.show_downloads {
            tracing::info!("Folder {}", name);
        }

        // Each folder carries its own zip control; match it inside the item
        // so the right archive is prepared.
        let control = wait::clickable_within(&folder, ZIP_CONTROL, DEFAULT_TIMEOUT, DEFAULT_POLL)
            .await?;
        control.click().await?;
        tracing::debug!("Requested zip preparation");

        wait::frame_and_switch(driver, PREPARE_FRAME, DEFAULT_TIMEOUT, DEFAULT_POLL).await?;

        let staged = staging::wait_for_downloads(
            &config.incomplete_downloads,
            Some(1),
            SETTLE_TIMEOUT,
            DEFAULT_POLL,
        )
        .await?;
        let archive_path = config.incomplete_downloads.join(&staged[0]);

        let dest = fs::course_materials_dir(config, &course.name).join(&name);
        fs::ensure_dir(&dest)?;
        extract_zip(&archive_path, &dest)?;
        std::fs::remove_file(&archive_path)?;
        stats.folders_extracted += 1;
        if config.show_downloads {
            tracing::info!("Extracted {} into {}", staged[0], dest.display());
        }

        driver.enter_default_frame().await?;
        let close = wait::clickable(driver, DIALOG_CLOSE, DEFAULT_TIMEOUT, DEFAULT_POLL).await?;
        close.click().await?;
        tracing::debug!("Closed download dialog");
    }

    Ok(())
}

/// File branch: plain files are fetched over authenticated HTTP.
async fn sync_files(
    session: &Session,
    client: &reqwest::Client,
    config: &Config,
    course: &Course,
    stats: &mut CourseStats,
) -> Result<()> {
    let driver = session.driver();

    let files = driver.find_all(By::Css(FILE_ITEM)).await?;
    for file in files {
        let name = item_name(&file).await?;

        let link = match file.find(By::Css("a[href]")).await?.attr("href").await? {
            Some(href) => href,
            None => {
                print_warning(&format!("{}: no download link, skipping", name));
                stats.items_skipped += 1;
                continue;
            }
        };

        let ext = match extension_of(&link) {
            Some(ext) => ext,
            None => {
                print_warning(&format!("{}: file extension not present, skipping", link));
                stats.items_skipped += 1;
                continue;
            }
        };

        // Material hrefs are portal-relative; the fetcher needs an absolute URL.
        let link = resolve_link(&config.fer, &link)?;

        let dest_dir = fs::course_materials_dir(config, &course.name);
        fs::ensure_dir(&dest_dir)?;
        let dest = dest_dir.join(format!("{}.{}", name, ext));

        fetch::fetch_to_file(client, &link, &config.username, &config.password, &dest).await?;
        stats.files_fetched += 1;
        if config.show_downloads {
            tracing::info!("Fetched {}", dest.display());
        }
    }

    Ok(())
}

/// Trimmed display name of a result item.
async fn item_name(item: &WebElement) -> Result<String> {
    let name_el = item.find(By::Css(ITEM_NAME)).await?;
    Ok(name_el.inner_html().await?.trim().to_string())
}

/// Resolve a material link against the portal base URL.
///
/// The download attribute carries the href as written in the markup, which
/// for portal-hosted files is a portal-relative path. Absolute links pass
/// through unchanged.
fn resolve_link(portal: &str, href: &str) -> Result<String> {
    Ok(Url::parse(portal)?.join(href)?.to_string())
}

/// Derive the file extension from a download link's URL path.
///
/// Links without an extension are unsupported; the caller skips them.
pub fn extension_of(link: &str) -> Option<String> {
    let path = match Url::parse(link) {
        Ok(url) => PathBuf::from(url.path()),
        Err(_) => PathBuf::from(link),
    };

    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .filter(|ext| !ext.is_empty())
}
