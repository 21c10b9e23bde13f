//! Zip archive extraction for folder downloads.

use std::fs::File;
use std::path::Path;

use zip::ZipArchive;

use crate::error::Result;

/// Extract a zip archive into `dest`, overwriting existing files.
pub fn extract_zip(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;
    archive.extract(dest)?;
    tracing::debug!(
        "Extracted {} entries from {} into {}",
        archive.len(),
        archive_path.display(),
        dest.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_test_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        for (name, content) in entries {
            writer
                .start_file(name.to_string(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_extract_nested_entries() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("folder.zip");
        write_test_zip(
            &archive,
            &[
                ("lecture-01.pdf", "slides"),
                ("exercises/sheet-01.pdf", "exercises"),
            ],
        );

        let dest = dir.path().join("out");
        extract_zip(&archive, &dest).unwrap();

        assert_eq!(
            std::fs::read_to_string(dest.join("lecture-01.pdf")).unwrap(),
            "slides"
        );
        assert_eq!(
            std::fs::read_to_string(dest.join("exercises/sheet-01.pdf")).unwrap(),
            "exercises"
        );
    }

    #[test]
    fn test_re_extraction_overwrites() {
        // Re-running a sync re-extracts everything; same-name files are
        // overwritten. Documented behavior, not a bug.
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out");

        let first = dir.path().join("v1.zip");
        write_test_zip(&first, &[("notes.txt", "old")]);
        extract_zip(&first, &dest).unwrap();

        let second = dir.path().join("v2.zip");
        write_test_zip(&second, &[("notes.txt", "new")]);
        extract_zip(&second, &dest).unwrap();

        assert_eq!(std::fs::read_to_string(dest.join("notes.txt")).unwrap(), "new");
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.zip");
        std::fs::write(&bogus, b"not a zip archive").unwrap();

        assert!(extract_zip(&bogus, &dir.path().join("out")).is_err());
    }
}
