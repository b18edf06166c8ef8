//! Zip snapshot unpacking.

use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::{Component, Path, PathBuf};

use zip::ZipArchive;

use crate::domain::AppError;

/// Unpack `bytes` into `dest` and return the directory holding the tree.
///
/// Snapshot archives wrap everything in one top-level folder (`repo-main/`);
/// that folder is returned. Archives without a single root return `dest`.
pub fn unpack(bytes: &[u8], dest: &Path) -> Result<PathBuf, AppError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::ArchiveError(format!("not a zip archive: {}", e)))?;

    let mut roots = BTreeSet::new();
    let mut nested = false;
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(|e| AppError::ArchiveError(e.to_string()))?;
        let path = entry.enclosed_name().ok_or_else(|| {
            AppError::ArchiveError(format!("entry escapes the archive root: {}", entry.name()))
        })?;

        let mut components = path.components().filter(|c| matches!(c, Component::Normal(_)));
        if let Some(first) = components.next() {
            roots.insert(first.as_os_str().to_os_string());
            nested |= components.next().is_some() || entry.is_dir();
        }
    }

    if roots.is_empty() {
        return Err(AppError::ArchiveError("archive is empty".to_string()));
    }

    tracing::debug!(dest = %dest.display(), entries = archive.len(), "extracting archive");
    archive.extract(dest).map_err(|e| AppError::ArchiveError(e.to_string()))?;

    match (roots.len(), roots.into_iter().next()) {
        (1, Some(root)) if nested => Ok(dest.join(root)),
        _ => Ok(dest.to_path_buf()),
    }
}
