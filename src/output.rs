//! Persisting and dumping the merged release list.

use std::path::Path;

use crate::error::OutputError;
use crate::release::store::ReleaseStore;
use crate::release::{NoteCategory, Release};

/// Serialize the store and write it to `path`, overwriting any
/// existing file.
pub fn write_releases(path: &Path, store: &ReleaseStore) -> Result<(), OutputError> {
    let bytes = store.to_json()?;
    std::fs::write(path, bytes).map_err(OutputError::WriteFailed)?;
    Ok(())
}

/// Print one release to stdout in a human-readable form.
pub fn dump_release(release: &Release) {
    println!("Name: {}", release.name);
    println!("ZipballUrl: {}", release.zipball_url);
    println!("TarballUrl: {}", release.tarball_url);
    println!("Commit:");
    println!("\tSHA: {}", release.commit.sha);
    println!("\tURL: {}", release.commit.url);
    if let Some(notes) = &release.release_notes {
        println!("Release Notes:");
        println!("\tVersion: {}", notes.version);
        for category in [
            NoteCategory::Fixes,
            NoteCategory::Features,
            NoteCategory::Maintenance,
            NoteCategory::Changes,
        ] {
            println!("\t{}:", category.as_str());
            for note in notes.notes(category) {
                println!("\t\t * {}", note);
            }
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::{Commit, ReleaseNotes};

    #[test]
    fn test_write_releases_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("r2c.json");
        std::fs::write(&path, "stale contents").expect("failed to seed file");

        let store = ReleaseStore::from_releases(vec![Release {
            name: "v1.0.0".to_string(),
            zipball_url: "https://example.com/zip".to_string(),
            tarball_url: "https://example.com/tar".to_string(),
            commit: Commit {
                sha: "abc123".to_string(),
                url: "https://example.com/commit".to_string(),
            },
            release_notes: Some(ReleaseNotes {
                release_name: "project 1.0.0".to_string(),
                version: "v1.0.0".to_string(),
                fixes: vec!["a fix".to_string()],
                ..Default::default()
            }),
        }]);

        write_releases(&path, &store).expect("failed to write");

        let written = std::fs::read_to_string(&path).expect("failed to read back");
        assert!(written.starts_with('['));
        assert!(written.contains(r#""name":"v1.0.0""#));
        assert!(written.contains(r#""fixes":["a fix"]"#));
        assert!(!written.contains("stale contents"));
    }

    #[test]
    fn test_write_releases_fails_on_missing_directory() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("missing").join("r2c.json");

        let store = ReleaseStore::default();
        let result = write_releases(&path, &store);

        assert!(matches!(result, Err(OutputError::WriteFailed(_))));
    }
}
