//! Detached OpenPGP signature verification for checksum manifests.
//!
//! The trusted keyring is compiled in as an armored constant and loaded
//! fresh on every call. Verification is binary pass/fail; there is no
//! signature-optional mode and no way to supply an alternate key at
//! runtime. The verifier trait exists purely so tests can exercise the
//! pipeline without release files signed by the production key.

use std::path::Path;

use pgp::composed::{Deserializable, SignedPublicKey, StandaloneSignature};

/// The armored HashiCorp release-signing public key (fingerprint
/// `C874 011F 0AB4 0511 0D02 1055 3436 5D94 72D7 468F`).
const HASHICORP_PUBLIC_KEY: &str = include_str!("hashicorp.asc");

/// Errors arising from signature verification.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The embedded keyring constant could not be parsed. This indicates a
    /// build defect, not a condition callers can trigger at runtime.
    #[error("trusted keyring is malformed: {reason}")]
    Keyring {
        /// Description of the keyring parse failure.
        reason: String,
    },

    /// The manifest or signature file could not be read.
    #[error("I/O error reading verification input: {0}")]
    Io(#[from] std::io::Error),

    /// The signature did not verify against the trusted keyring.
    #[error("signature verification failed: {reason}")]
    SignatureInvalid {
        /// Description of the verification failure.
        reason: String,
    },
}

/// Trait for verifying a checksum manifest against its detached signature.
///
/// The production implementation is [`KeyringVerifier`]; tests inject
/// their own so the pipeline can run against fixture material.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestVerifier {
    /// Verify the detached signature at `signature_path` over the bytes at
    /// `data_path`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Io`] if either file cannot be read, and
    /// [`VerifyError::SignatureInvalid`] if the signature is corrupt, was
    /// made by an untrusted key, or does not cover exactly the bytes in
    /// `data_path`.
    fn verify(&self, data_path: &Path, signature_path: &Path) -> Result<(), VerifyError>;
}

/// Verifier backed by the embedded trusted keyring.
pub struct KeyringVerifier;

impl ManifestVerifier for KeyringVerifier {
    fn verify(&self, data_path: &Path, signature_path: &Path) -> Result<(), VerifyError> {
        verify_detached(HASHICORP_PUBLIC_KEY, data_path, signature_path)
    }
}

/// Keyring-parameterised verification backing [`KeyringVerifier`].
fn verify_detached(
    keyring: &str,
    data_path: &Path,
    signature_path: &Path,
) -> Result<(), VerifyError> {
    let (key, _headers) =
        SignedPublicKey::from_string(keyring).map_err(|e| VerifyError::Keyring {
            reason: e.to_string(),
        })?;

    let data = std::fs::read(data_path)?;
    let signature_file = std::fs::File::open(signature_path)?;
    let signature = StandaloneSignature::from_bytes(signature_file).map_err(|e| {
        VerifyError::SignatureInvalid {
            reason: format!("unreadable signature: {e}"),
        }
    })?;

    // A release signature may be issued by the primary key or any of its
    // signing subkeys.
    if signature.verify(&key, &data).is_ok() {
        return Ok(());
    }
    for subkey in &key.public_subkeys {
        if signature.verify(subkey, &data).is_ok() {
            return Ok(());
        }
    }

    Err(VerifyError::SignatureInvalid {
        reason: "no key in the trusted keyring produced this signature".to_owned(),
    })
}
