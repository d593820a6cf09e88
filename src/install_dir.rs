//! Install directory resolution.
//!
//! A caller-supplied directory is validated but never created or cleared;
//! when no directory is supplied a fresh temporary directory is allocated
//! and ownership of it passes to the caller.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{InstallError, Result};

/// Resolve the directory Terraform will be installed into.
///
/// With `Some(dir)`, verifies the directory is accessible and returns it
/// unchanged; the call has no side effects and is idempotent. With `None`,
/// creates a uniquely named temporary directory that is not removed when
/// the install completes — the caller owns it from then on.
///
/// # Errors
///
/// Returns [`InstallError::DirectoryUnavailable`] if a supplied directory
/// cannot be accessed, and [`InstallError::Io`] if a temporary directory
/// cannot be created.
pub fn ensure_install_dir(requested: Option<&Utf8Path>) -> Result<Utf8PathBuf> {
    match requested {
        Some(dir) => {
            std::fs::metadata(dir).map_err(|e| InstallError::DirectoryUnavailable {
                path: dir.to_owned(),
                reason: e.to_string(),
            })?;
            Ok(dir.to_owned())
        }
        None => {
            let temp = tempfile::Builder::new().prefix("tfinstall").tempdir()?;
            let path = temp.keep();
            Utf8PathBuf::from_path_buf(path).map_err(|p| InstallError::DirectoryUnavailable {
                path: Utf8PathBuf::from(p.to_string_lossy().into_owned()),
                reason: "temporary directory path is not valid UTF-8".to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8_temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let temp = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("UTF-8 path");
        (temp, path)
    }

    #[test]
    fn existing_directory_is_returned_unchanged() {
        let (_temp, dir) = utf8_temp_dir();
        std::fs::write(dir.join("keep-me"), b"contents").expect("write sentinel");

        let first = ensure_install_dir(Some(&dir)).expect("resolve");
        let second = ensure_install_dir(Some(&dir)).expect("resolve again");
        assert_eq!(first, dir);
        assert_eq!(second, dir);
        assert!(dir.join("keep-me").exists(), "contents must not be touched");
    }

    #[test]
    fn missing_directory_is_unavailable() {
        let (_temp, dir) = utf8_temp_dir();
        let missing = dir.join("does-not-exist");

        let result = ensure_install_dir(Some(&missing));
        match result {
            Err(InstallError::DirectoryUnavailable { path, .. }) => {
                assert_eq!(path, missing);
            }
            other => panic!("expected DirectoryUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn no_directory_allocates_a_fresh_one() {
        let dir = ensure_install_dir(None).expect("allocate");
        assert!(dir.as_std_path().is_dir());
        assert!(dir.file_name().is_some_and(|n| n.starts_with("tfinstall")));
        std::fs::remove_dir_all(&dir).expect("clean up allocated dir");
    }
}
