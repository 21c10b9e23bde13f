//! Staging-directory completion polling.
//!
//! The browser drops in-flight downloads into the staging directory under
//! marker names; the synchronizer polls the listing until it settles.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Whether a staged entry name denotes a still-in-progress download.
pub fn is_incomplete(name: &str) -> bool {
    if name.contains(".com.brave.Browser") {
        return true;
    }
    name.ends_with(".crdownload")
}

/// Whether a staging listing is settled: no incomplete entries, and (when an
/// expected count is given) exactly that many entries.
pub fn is_settled(entries: &[String], expected: Option<usize>) -> bool {
    if let Some(count) = expected {
        if entries.len() != count {
            return false;
        }
    }
    !entries.iter().any(|name| is_incomplete(name))
}

/// Poll the staging directory until it settles, returning the final listing.
///
/// Fails with [`Error::UnexpectedDownloadCount`] if the budget expires with
/// all downloads complete but the wrong number of entries present, and with
/// [`Error::DownloadTimeout`] otherwise.
pub async fn wait_for_downloads(
    dir: &Path,
    expected: Option<usize>,
    timeout: Duration,
    poll: Duration,
) -> Result<Vec<String>> {
    let deadline = Instant::now() + timeout;
    loop {
        let entries = list_entries(dir)?;
        tracing::debug!("Waiting for downloads to settle: {:?}", entries);

        if is_settled(&entries, expected) {
            return Ok(entries);
        }

        if Instant::now() >= deadline {
            if let Some(count) = expected {
                if !entries.iter().any(|name| is_incomplete(name)) {
                    return Err(Error::UnexpectedDownloadCount {
                        expected: count,
                        found: entries.len(),
                    });
                }
            }
            return Err(Error::DownloadTimeout {
                dir: dir.display().to_string(),
                secs: timeout.as_secs(),
            });
        }

        tokio::time::sleep(poll).await;
    }
}

fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        entries.push(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_incomplete_markers() {
        assert!(is_incomplete("report.pdf.crdownload"));
        assert!(is_incomplete("archive.zip.com.brave.Browser.xyz"));
        assert!(!is_incomplete("report.pdf"));
        assert!(!is_incomplete("crdownload.txt"));
    }

    #[test]
    fn test_settled_requires_count_and_completeness() {
        let one_complete = vec!["report.pdf".to_string()];
        let one_partial = vec!["report.pdf.crdownload".to_string()];
        let two_complete = vec!["a.pdf".to_string(), "b.pdf".to_string()];

        assert!(is_settled(&one_complete, Some(1)));
        assert!(!is_settled(&one_partial, Some(1)));
        assert!(!is_settled(&two_complete, Some(1)));
        assert!(is_settled(&two_complete, None));
        assert!(is_settled(&two_complete, Some(2)));
        assert!(is_settled(&[], None));
        assert!(!is_settled(&[], Some(1)));
    }

    #[tokio::test]
    async fn test_settles_once_rename_lands() {
        let dir = tempfile::tempdir().unwrap();
        let partial = dir.path().join("report.pdf.crdownload");
        fs::write(&partial, b"partial").unwrap();

        let complete = dir.path().join("report.pdf");
        let renamer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(600)).await;
            fs::rename(&partial, &complete).unwrap();
        });

        let entries = wait_for_downloads(
            dir.path(),
            Some(1),
            Duration::from_secs(5),
            Duration::from_millis(500),
        )
        .await
        .unwrap();

        assert_eq!(entries, vec!["report.pdf".to_string()]);
        renamer.await.unwrap();
    }

    #[tokio::test]
    async fn test_never_settling_download_times_out() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stuck.zip.crdownload"), b"partial").unwrap();

        let result = wait_for_downloads(
            dir.path(),
            Some(1),
            Duration::from_millis(600),
            Duration::from_millis(200),
        )
        .await;

        assert!(matches!(result, Err(Error::DownloadTimeout { .. })));
    }

    #[tokio::test]
    async fn test_wrong_entry_count_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.pdf"), b"a").unwrap();
        fs::write(dir.path().join("b.pdf"), b"b").unwrap();

        let result = wait_for_downloads(
            dir.path(),
            Some(1),
            Duration::from_millis(600),
            Duration::from_millis(200),
        )
        .await;

        assert!(matches!(
            result,
            Err(Error::UnexpectedDownloadCount {
                expected: 1,
                found: 2
            })
        ));
    }
}
