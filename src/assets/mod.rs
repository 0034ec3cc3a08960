//! Media listing for the gallery folders.
//!
//! A listing is a fresh, read-only snapshot of one directory: the direct
//! children whose extension belongs to the gallery's media set, minus any
//! configured exclude patterns, in natural order. A missing folder is an
//! empty gallery, not an error.

pub mod natural;

use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use thiserror::Error;
use walkdir::WalkDir;

use crate::types::MediaFile;

pub use natural::natural_cmp;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("cannot stat media folder: {0}")]
    Stat(#[from] std::io::Error),
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] globset::Error),
}

/// Decides which directory entries count as media for one gallery.
#[derive(Debug, Clone)]
pub struct MediaFilter {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl MediaFilter {
    /// Accepts files whose extension (case-insensitive, leading dot optional)
    /// is in `extensions`.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { extensions, excludes: GlobSet::empty() }
    }

    /// Adds case-insensitive glob patterns matched against the filename.
    pub fn with_excludes<I, S>(mut self, patterns: I) -> Result<Self, ListingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(GlobBuilder::new(pattern.as_ref()).case_insensitive(true).build()?);
        }
        self.excludes = builder.build()?;
        Ok(self)
    }

    pub fn accepts(&self, name: &str) -> bool {
        let ext = match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some(ext) => ext,
            None => return false,
        };
        self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)) && !self.excludes.is_match(name)
    }
}

/// Lists the media files directly inside `folder`.
///
/// Returns an empty list when the folder does not exist. Entries that cannot
/// be read individually (dangling links, races with deletion) are skipped;
/// failing to stat or read the folder itself is an error.
pub fn try_list(folder: &Path, filter: &MediaFilter) -> Result<Vec<MediaFile>, ListingError> {
    if !folder.try_exists()? {
        tracing::debug!("Media folder {} does not exist; empty listing", folder.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                tracing::warn!("Skipping unreadable entry in {}: {}", folder.display(), e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!("Skipping non UTF-8 filename {:?}", entry.file_name());
            continue;
        };
        if filter.accepts(name) {
            files.push(MediaFile::new(name));
        }
    }

    files.sort_by(|a, b| natural_cmp(&a.name, &b.name));
    Ok(files)
}
