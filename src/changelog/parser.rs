//! Single-pass changelog parser.
//!
//! Walks the changelog one trimmed line at a time, tracking the current
//! release section, the active category subsection, and an accumulator
//! for the in-progress (possibly multi-line) comment block. Whenever a
//! heading or bullet line closes a block, the buffered text is
//! dispatched into the release store under the version tag derived from
//! the most recent release heading.

use regex_lite::Regex;
use tracing::debug;

use crate::release::store::ReleaseStore;
use crate::release::NoteCategory;

/// Dotted-triple version number embedded in a release heading,
/// e.g. "24.0.0" in "## jest 24.0.0".
const VERSION_PATTERN: &str = r"[0-9]+\.[0-9]+\.[0-9]+";

/// Parse a changelog and attach its entries to matching releases.
///
/// Entries whose derived version has no matching tag in the store
/// silently attach to nothing. A comment still buffered at end of
/// input is dropped; blocks only land when a later heading or bullet
/// line closes them.
pub fn parse_changelog(changelog: &str, store: &mut ReleaseStore) {
    let version_re = Regex::new(VERSION_PATTERN).unwrap();

    let mut release_heading = String::new();
    let mut version_tag = String::new();
    let mut comment = String::new();
    let mut category = NoteCategory::Changes;

    for raw_line in changelog.lines() {
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }

        // A line starting with neither a heading marker nor a bullet
        // continues the current comment block.
        if !line.starts_with('#') && !line.starts_with('*') {
            comment.push('\n');
            comment.push_str(line.trim());
            continue;
        }

        // Heading and bullet lines close the buffered block. The buffer
        // is only cleared by the resets below, never by the flush
        // itself, so a boundary that resets nothing re-dispatches the
        // same block.
        if !comment.is_empty() {
            store.append_note(category, &release_heading, &version_tag, &comment);
        }

        if let Some(rest) = line.strip_prefix("## ") {
            release_heading = rest.to_string();
            // A heading naming several versions ("jest 22.0.2 && 22.0.3")
            // attributes everything to the first one.
            let version = version_re
                .find(&release_heading)
                .map(|m| m.as_str())
                .unwrap_or_default();
            version_tag = format!("v{}", version);
            if version.is_empty() {
                debug!(heading = %release_heading, "Release heading carries no version number");
            }
            comment.clear();
            category = NoteCategory::Changes;
        }

        // Everything between a versionless heading (or the top of the
        // document) and the next release heading is preamble.
        if !version_re.is_match(&release_heading) {
            continue;
        }

        if line.starts_with("### ") {
            if line.contains("Fixes") {
                comment.clear();
                category = NoteCategory::Fixes;
            } else if line.contains("Features") {
                comment.clear();
                category = NoteCategory::Features;
            } else if line.contains("Chore & Maintenance") {
                comment.clear();
                category = NoteCategory::Maintenance;
            }
            // Unrecognized subsections leave the previous category in
            // effect.
        }

        if let Some(rest) = line.strip_prefix("* ") {
            comment = rest.to_string();
        }
    }
}
