//! ZIP archive extraction with path-traversal protection.
//!
//! Entries are expanded in archive order. Any entry whose resolved path
//! would land outside the destination directory aborts extraction with
//! [`ExtractionError::PathTraversal`]; files already written stay on disk
//! (no rollback), so callers must treat a failed extraction as leaving the
//! destination in an indeterminate state.

use std::path::{Component, Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Errors arising from archive extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// The archive's central directory could not be parsed.
    #[error("corrupt archive {path}: {reason}")]
    ArchiveCorrupt {
        /// Path of the unreadable archive.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// An entry's resolved path escapes the destination directory.
    #[error("{path}: illegal file path")]
    PathTraversal {
        /// The offending entry name as stored in the archive.
        path: String,
    },

    /// I/O error during extraction.
    #[error("extraction I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Expand the ZIP archive at `archive_path` into `dest_dir`.
///
/// Returns the resolved path of every entry, directories included, in
/// archive order. File permission bits stored in the archive are applied on
/// Unix.
///
/// # Errors
///
/// Returns [`ExtractionError::ArchiveCorrupt`] if the archive cannot be
/// parsed, [`ExtractionError::PathTraversal`] if an entry escapes
/// `dest_dir`, and [`ExtractionError::Io`] on filesystem failures. On any
/// error, entries extracted before the failure are left in place.
pub fn unzip(archive_path: &Path, dest_dir: &Path) -> Result<Vec<PathBuf>, ExtractionError> {
    let file = std::fs::File::open(archive_path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| map_zip_error(archive_path, &e))?;

    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| map_zip_error(archive_path, &e))?;
        let name = entry.name().to_owned();
        let out_path = resolve_entry_path(dest_dir, &name)?;

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)?;
            entries.push(out_path);
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out_file = std::fs::File::create(&out_path)?;
        std::io::copy(&mut entry, &mut out_file)?;
        drop(out_file);

        #[cfg(unix)]
        {
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&out_path, std::fs::Permissions::from_mode(mode))?;
            }
        }

        entries.push(out_path);
    }
    Ok(entries)
}

/// Resolve an entry name against the destination directory, rejecting any
/// name that would escape it.
///
/// `.` and `..` segments are resolved lexically, matching the destination
/// prefix check the archive format's zip-slip guard requires: a `..` may
/// step back over a preceding segment of the same entry, but never above
/// `dest_dir`, and the resolved path must be strictly below `dest_dir`.
fn resolve_entry_path(dest_dir: &Path, name: &str) -> Result<PathBuf, ExtractionError> {
    let mut resolved = dest_dir.to_path_buf();
    let mut depth = 0usize;
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(ExtractionError::PathTraversal {
                        path: name.to_owned(),
                    });
                }
                resolved.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ExtractionError::PathTraversal {
                    path: name.to_owned(),
                });
            }
        }
    }
    if depth == 0 {
        // The entry resolved to the destination itself.
        return Err(ExtractionError::PathTraversal {
            path: name.to_owned(),
        });
    }
    Ok(resolved)
}

/// Map a `zip` crate error, preserving I/O causes.
fn map_zip_error(archive_path: &Path, err: &zip::result::ZipError) -> ExtractionError {
    match err {
        zip::result::ZipError::Io(e) => {
            ExtractionError::Io(std::io::Error::new(e.kind(), e.to_string()))
        }
        other => ExtractionError::ArchiveCorrupt {
            path: archive_path.to_path_buf(),
            reason: other.to_string(),
        },
    }
}
