//! The verified install pipeline.
//!
//! Sequences the pipeline stages linearly: resolve the install directory,
//! fetch the checksum manifest and its detached signature into a scratch
//! directory, verify the signature against the embedded keyring, download
//! the platform-appropriate release archive, and extract it. No stage is
//! retried and a failure at any stage aborts the whole install.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;

use crate::download::{HttpFetcher, ReleaseFetcher};
use crate::error::Result;
use crate::extract;
use crate::install_dir::ensure_install_dir;
use crate::platform;
use crate::signature::{KeyringVerifier, ManifestVerifier};

/// Base URL of the release mirror.
const BASE_URL: &str = "https://releases.hashicorp.com/terraform";

/// Suffix appended to the manifest filename to name its detached signature.
/// `72D7468F` is the trailing fragment of the signing key's fingerprint.
const SUMS_SIGNATURE_SUFFIX: &str = ".72D7468F.sig";

/// Fixed name the release archive is downloaded under.
const ARCHIVE_FILENAME: &str = "terraform.zip";

/// Name of the extracted executable.
const BINARY_FILENAME: &str = "terraform";

/// Download, verify, and install the given Terraform version, returning the
/// path of the extracted `terraform` executable.
///
/// With `install_dir` set, the directory must already exist; the archive is
/// always written to `terraform.zip` inside it, so installing a second
/// version into the same directory overwrites the first — callers wanting
/// several versions must use distinct directories. With `install_dir`
/// unset, a fresh temporary directory is allocated and ownership of it
/// passes to the caller. Either way, `terraform.zip` is left in place next
/// to the extracted binary.
///
/// `user_agent_suffix` is appended to the User-Agent header of every
/// outbound request when non-empty.
///
/// The returned path is derived by filename convention from the archive
/// layout; it is not re-checked for existence.
///
/// # Errors
///
/// Any stage failure aborts the install and propagates; see
/// [`InstallError`](crate::error::InstallError) for the taxonomy. After a
/// failure the install directory's contents are indeterminate, but the
/// scratch directory used for the manifest and signature is removed on
/// every exit path.
pub fn install(
    version: &str,
    install_dir: Option<&Utf8Path>,
    user_agent_suffix: &str,
) -> Result<Utf8PathBuf> {
    install_with(
        &HttpFetcher::new(user_agent_suffix),
        &KeyringVerifier,
        version,
        install_dir,
    )
}

/// [`install`] with injected fetch and verification stages.
///
/// The production entry point delegates here with the `ureq`-backed
/// fetcher and the embedded-keyring verifier; this function is public so
/// integration tests can serve release files without network access and
/// verify them against fixture keys.
///
/// # Errors
///
/// As for [`install`].
pub fn install_with(
    fetcher: &dyn ReleaseFetcher,
    verifier: &dyn ManifestVerifier,
    version: &str,
    install_dir: Option<&Utf8Path>,
) -> Result<Utf8PathBuf> {
    let target_dir = ensure_install_dir(install_dir)?;

    // Scratch directory for the manifest and its signature; the guard
    // removes it on every exit path, success or failure.
    let scratch = tempfile::Builder::new().prefix("tfinstall").tempdir()?;

    let sums_filename = sums_filename(version);
    let sums_sig_filename = format!("{sums_filename}{SUMS_SIGNATURE_SUFFIX}");
    let sums_url = sums_url(version);
    let sums_sig_url = format!("{BASE_URL}/{version}/{sums_sig_filename}");
    let sums_path = scratch.path().join(&sums_filename);
    let sums_sig_path = scratch.path().join(&sums_sig_filename);

    debug!("fetching checksum manifest from {sums_url}");
    fetcher.fetch(&sums_path, &sums_url)?;
    fetcher.fetch(&sums_sig_path, &sums_sig_url)?;

    debug!("verifying checksum manifest signature");
    verifier.verify(&sums_path, &sums_sig_path)?;

    let url = archive_url(version, platform::os_name(), platform::arch_name());
    let archive_path = target_dir.join(ARCHIVE_FILENAME);
    debug!("fetching release archive from {url}");
    fetcher.fetch(archive_path.as_std_path(), &url)?;

    debug!("extracting {archive_path} into {target_dir}");
    extract::unzip(archive_path.as_std_path(), target_dir.as_std_path())?;

    Ok(target_dir.join(BINARY_FILENAME))
}

/// Filename of the checksum manifest for `version`.
fn sums_filename(version: &str) -> String {
    format!("terraform_{version}_SHA256SUMS")
}

/// URL of the checksum manifest for `version`.
fn sums_url(version: &str) -> String {
    format!("{BASE_URL}/{version}/{}", sums_filename(version))
}

/// URL of the release archive for `version` on the given platform, with the
/// manifest URL embedded as a checksum reference.
fn archive_url(version: &str, os_name: &str, arch_name: &str) -> String {
    format!(
        "{BASE_URL}/{version}/terraform_{version}_{os_name}_{arch_name}.zip?checksum=file:{}",
        sums_url(version),
    )
}
