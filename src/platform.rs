//! Platform naming for release URLs.
//!
//! Release artefacts are published under the Go toolchain's platform
//! vocabulary (`darwin`, `amd64`, `386`, ...), which differs from Rust's
//! `std::env::consts` names. These helpers read the running environment and
//! translate; the caller cannot supply the values.

/// The OS name used in release URLs for the running platform.
#[must_use]
pub fn os_name() -> &'static str {
    release_os(std::env::consts::OS)
}

/// The CPU architecture name used in release URLs for the running platform.
#[must_use]
pub fn arch_name() -> &'static str {
    release_arch(std::env::consts::ARCH)
}

fn release_os(os: &'static str) -> &'static str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

fn release_arch(arch: &'static str) -> &'static str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        other => other,
    }
}
