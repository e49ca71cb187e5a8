//! Marker-region patching for the profile README.
//!
//! The region runs from the start of `START_MARKER` to the end of
//! `END_MARKER`. Locating it and substituting into it are separate steps so
//! the no-op path (no markers) never touches the file.

use std::fs;
use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};

use crate::badge::{END_MARKER, START_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Updated,
    MarkersMissing,
}

/// Byte span of the first marker region at or after `from`, markers included.
fn find_region_from(content: &str, from: usize) -> Option<Range<usize>> {
    let start = from + content[from..].find(START_MARKER)?;
    let after_start = start + START_MARKER.len();
    let end = after_start + content[after_start..].find(END_MARKER)? + END_MARKER.len();
    Some(start..end)
}

/// Byte span of the first marker region, or `None` if either marker is absent.
pub fn find_region(content: &str) -> Option<Range<usize>> {
    find_region_from(content, 0)
}

pub fn replace_region(content: &str, region: Range<usize>, section: &str) -> String {
    let mut out = String::with_capacity(content.len() - region.len() + section.len());
    out.push_str(&content[..region.start]);
    out.push_str(section);
    out.push_str(&content[region.end..]);
    out
}

/// Replaces every marker region with `section`. Returns `None` when the
/// document has no complete region.
pub fn patch(content: &str, section: &str) -> Option<String> {
    let mut region = find_region(content)?;
    let mut out = String::with_capacity(content.len() + section.len());
    let mut copied = 0;

    loop {
        out.push_str(&content[copied..region.start]);
        out.push_str(section);
        copied = region.end;
        match find_region_from(content, copied) {
            Some(next) => region = next,
            None => break,
        }
    }

    out.push_str(&content[copied..]);
    Some(out)
}

/// Rewrites the marker region of the file at `path`. A file without markers
/// is left untouched.
pub fn update_readme(path: &Path, section: &str) -> Result<PatchOutcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let Some(new_content) = patch(&content, section) else {
        tracing::warn!(
            path = %path.display(),
            "GITHUB-STATS markers not found in README"
        );
        return Ok(PatchOutcome::MarkersMissing);
    };

    fs::write(path, new_content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(PatchOutcome::Updated)
}
