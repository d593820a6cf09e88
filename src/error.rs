//! Error types for the install pipeline.
//!
//! Each pipeline stage defines its own error enum next to its code; this
//! module defines the top-level [`InstallError`] that composes them and the
//! [`Result`] alias used by the orchestrator.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::download::DownloadError;
use crate::extract::ExtractionError;
use crate::signature::VerifyError;

/// Errors that can occur during a Terraform install.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The requested install directory does not exist or is not accessible.
    #[error("could not access directory {path} for installing Terraform: {reason}")]
    DirectoryUnavailable {
        /// The directory that was requested.
        path: Utf8PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// A release file could not be downloaded.
    #[error("download failed: {0}")]
    Download(#[from] DownloadError),

    /// The checksum manifest signature did not verify.
    #[error("checksum signature verification failed: {0}")]
    Signature(#[from] VerifyError),

    /// The release archive could not be extracted.
    #[error("archive extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// A local filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`InstallError`].
pub type Result<T> = std::result::Result<T, InstallError>;
