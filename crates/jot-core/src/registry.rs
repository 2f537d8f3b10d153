//! Folder scans that back the saved and hidden note listings.
//!
//! The filesystem is the only source of truth: there is no index, and rows
//! come back in whatever order the directory enumeration yields them.

use std::path::Path;

use crate::{Error, NoteKind, NoteRecord, Result};

/// List every note of `kind` directly inside `dir`.
///
/// Sub-directories and files with other extensions are ignored. An entry
/// whose metadata cannot be read is skipped rather than failing the scan.
pub fn scan(dir: &Path, kind: NoteKind) -> Result<Vec<NoteRecord>> {
    let listing_error = |source| Error::Listing {
        path: dir.to_path_buf(),
        source,
    };

    let mut records = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(listing_error)? {
        let entry = entry.map_err(listing_error)?;
        let path = entry.path();
        if !kind.matches(&path) {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => continue,
            Err(error) => {
                tracing::warn!("Skipping {}: {}", path.display(), error);
                continue;
            }
        };
        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(error) => {
                tracing::warn!("No modification time for {}: {}", path.display(), error);
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy().into_owned();
        match NoteRecord::from_modified(file_name, modified) {
            Some(record) => records.push(record),
            None => tracing::warn!("Unrepresentable modification time on {}", path.display()),
        }
    }

    tracing::debug!(
        "Scanned {} {:?} notes in {}",
        records.len(),
        kind,
        dir.display()
    );
    Ok(records)
}
