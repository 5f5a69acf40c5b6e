//! r2c - Merges a project's release tags with its markdown changelog.
//!
//! # Overview
//!
//! r2c fetches the upstream tag list and changelog, correlates changelog
//! sections with tags by the version number embedded in each release
//! heading, and writes the merged result to a JSON file.

pub mod changelog;
pub mod error;
pub mod fetch;
pub mod output;
pub mod release;

// Re-export commonly used types
pub use changelog::parse_changelog;
pub use error::{FetchError, OutputError, StoreError};
pub use release::{Commit, NoteCategory, Release, ReleaseNotes, ReleaseStore};
