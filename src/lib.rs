//! Verified download and installation of Terraform release binaries.
//!
//! This crate fetches a specific Terraform version from the official
//! release mirror, verifies the release checksum manifest against an
//! embedded trusted OpenPGP key before anything is installed, extracts the
//! release ZIP with a path-traversal guard, and returns the path of the
//! extracted executable. It is a one-shot provisioning helper for tooling
//! that needs a guaranteed-correct local copy of a versioned binary; which
//! version to install, where to cache it, and how to invoke it are the
//! caller's business.
//!
//! The sole entry point is [`install::install`]. The pipeline is strictly
//! linear and blocking, with no retries and no state shared across calls.
//! One deliberate quirk is preserved from the upstream design: the HTTP
//! fetch step does not inspect response status codes, so an error page from
//! the mirror lands on disk verbatim and is caught by the signature gate or
//! the archive parse instead.
//!
//! # Modules
//!
//! - [`download`] - Blocking HTTP fetch of release files
//! - [`error`] - The top-level error taxonomy
//! - [`extract`] - ZIP extraction with zip-slip protection
//! - [`install`] - The install orchestrator
//! - [`install_dir`] - Install directory resolution
//! - [`platform`] - OS and architecture names for release URLs
//! - [`signature`] - Detached signature verification against the embedded keyring

pub mod download;
pub mod error;
pub mod extract;
pub mod install;
pub mod install_dir;
pub mod platform;
pub mod signature;
