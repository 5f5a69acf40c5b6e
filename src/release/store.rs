//! Ordered release store keyed by tag name.

use crate::error::StoreError;

use super::model::{NoteCategory, Release, ReleaseNotes};

/// Ordered collection of releases, one per upstream tag.
///
/// Insertion order matches the tag API response (most recent first).
/// Lookup is a linear scan by exact tag name; release counts are small
/// enough that a name index buys nothing.
#[derive(Debug, Clone, Default)]
pub struct ReleaseStore {
    releases: Vec<Release>,
}

impl ReleaseStore {
    /// Build a store from already-constructed releases.
    pub fn from_releases(releases: Vec<Release>) -> Self {
        Self { releases }
    }

    /// Deserialize the tag-list JSON into a fresh store.
    pub fn from_tag_json(json: &str) -> Result<Self, StoreError> {
        let releases: Vec<Release> =
            serde_json::from_str(json).map_err(StoreError::Deserialize)?;
        Ok(Self { releases })
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.releases.iter()
    }

    /// Find a release by exact tag name.
    pub fn find_by_name(&self, name: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.name == name)
    }

    /// Attach one comment block to the release whose tag name equals
    /// `version`. A version with no matching tag attaches to nothing.
    ///
    /// `release_name` and `version` on the notes are overwritten on
    /// every call, so the latest matching changelog entry wins.
    pub fn append_note(
        &mut self,
        category: NoteCategory,
        release_heading: &str,
        version: &str,
        text: &str,
    ) {
        if let Some(release) = self.releases.iter_mut().find(|r| r.name == version) {
            let notes = release.release_notes.get_or_insert_with(ReleaseNotes::default);
            notes.release_name = release_heading.to_string();
            notes.version = version.to_string();
            notes.notes_mut(category).push(text.to_string());
        }
    }

    /// Serialize the store to a JSON array, omitting empty fields.
    pub fn to_json(&self) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(&self.releases).map_err(StoreError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> ReleaseStore {
        let releases = names
            .iter()
            .map(|name| Release {
                name: name.to_string(),
                ..Default::default()
            })
            .collect();
        ReleaseStore::from_releases(releases)
    }

    #[test]
    fn test_find_by_name_hit_and_miss() {
        let store = store_with(&["v2.0.0", "v1.0.0"]);

        assert_eq!(store.find_by_name("v1.0.0").unwrap().name, "v1.0.0");
        assert!(store.find_by_name("v3.0.0").is_none());
    }

    #[test]
    fn test_append_note_initializes_notes_lazily() {
        let mut store = store_with(&["v1.0.0"]);
        assert!(store.find_by_name("v1.0.0").unwrap().release_notes.is_none());

        store.append_note(NoteCategory::Fixes, "jest 1.0.0", "v1.0.0", "fixed it");

        let notes = store
            .find_by_name("v1.0.0")
            .unwrap()
            .release_notes
            .as_ref()
            .unwrap();
        assert_eq!(notes.release_name, "jest 1.0.0");
        assert_eq!(notes.version, "v1.0.0");
        assert_eq!(notes.fixes, ["fixed it".to_string()]);
    }

    #[test]
    fn test_append_note_unknown_version_is_noop() {
        let mut store = store_with(&["v1.0.0"]);

        store.append_note(NoteCategory::Fixes, "jest 9.9.9", "v9.9.9", "lost");

        assert!(store.find_by_name("v1.0.0").unwrap().release_notes.is_none());
    }

    #[test]
    fn test_append_note_overwrites_heading_on_every_call() {
        let mut store = store_with(&["v1.0.0"]);

        store.append_note(NoteCategory::Fixes, "first heading", "v1.0.0", "a");
        store.append_note(NoteCategory::Features, "second heading", "v1.0.0", "b");

        let notes = store
            .find_by_name("v1.0.0")
            .unwrap()
            .release_notes
            .as_ref()
            .unwrap();
        assert_eq!(notes.release_name, "second heading");
        assert_eq!(notes.fixes, ["a".to_string()]);
        assert_eq!(notes.features, ["b".to_string()]);
    }

    #[test]
    fn test_append_note_preserves_document_order() {
        let mut store = store_with(&["v1.0.0"]);

        store.append_note(NoteCategory::Fixes, "h", "v1.0.0", "first");
        store.append_note(NoteCategory::Fixes, "h", "v1.0.0", "second");

        let notes = store
            .find_by_name("v1.0.0")
            .unwrap()
            .release_notes
            .as_ref()
            .unwrap();
        assert_eq!(notes.fixes, ["first".to_string(), "second".to_string()]);
    }
}
