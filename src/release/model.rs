//! Release data model mirroring the upstream tags API.
//!
//! JSON field names match what the GitHub tags endpoint emits; empty
//! and absent fields are omitted on output so the merged document only
//! carries what was actually found.

use serde::{Deserialize, Serialize};

/// The commit a tag points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

/// Structured changelog notes for one release.
///
/// Created lazily when the first matching changelog entry is attached.
/// Each string is one accumulated comment block, newline-joined when
/// the block spanned multiple lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNotes {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub release_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintenance: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<String>,
}

impl ReleaseNotes {
    /// The note list for a category.
    pub fn notes(&self, category: NoteCategory) -> &[String] {
        match category {
            NoteCategory::Fixes => &self.fixes,
            NoteCategory::Features => &self.features,
            NoteCategory::Maintenance => &self.maintenance,
            NoteCategory::Changes => &self.changes,
        }
    }

    pub fn notes_mut(&mut self, category: NoteCategory) -> &mut Vec<String> {
        match category {
            NoteCategory::Fixes => &mut self.fixes,
            NoteCategory::Features => &mut self.features,
            NoteCategory::Maintenance => &mut self.maintenance,
            NoteCategory::Changes => &mut self.changes,
        }
    }
}

/// One upstream version tag plus its optional changelog notes.
///
/// Identity is the tag `name` (e.g. `"v24.0.0"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zipball_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tarball_url: String,
    #[serde(default)]
    pub commit: Commit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_notes: Option<ReleaseNotes>,
}

/// Classification of a comment block.
///
/// `Changes` is the fallback for bullets that appear before any
/// recognized category subsection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteCategory {
    Fixes,
    Features,
    Maintenance,
    #[default]
    Changes,
}

impl NoteCategory {
    /// Display name for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixes => "Fixes",
            Self::Features => "Features",
            Self::Maintenance => "Maintenance",
            Self::Changes => "Changes",
        }
    }
}
