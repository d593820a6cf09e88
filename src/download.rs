//! Release file download over blocking HTTP.
//!
//! Provides a trait-based abstraction for fetching release files so that the
//! orchestrator can be exercised in tests without network access, plus the
//! production `ureq` implementation.

use std::path::Path;
use std::time::Duration;

/// Network timeout applied to each release download.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Trait for fetching a URL's body into a local file.
///
/// Abstracting the fetch step allows tests to serve fixture bytes without
/// network access.
#[cfg_attr(test, mockall::automock)]
pub trait ReleaseFetcher {
    /// Fetch `url` and write the response body verbatim to `dest`,
    /// overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Transport`] if the request cannot be
    /// completed, or [`DownloadError::Io`] if `dest` cannot be created or
    /// written.
    fn fetch(&self, dest: &Path, url: &str) -> Result<(), DownloadError>;
}

/// Errors arising from release downloads.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// The HTTP request failed (DNS, connection, timeout).
    #[error("error fetching {url}: {reason}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// I/O error writing the downloaded file.
    #[error("I/O error writing download: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP-based fetcher using `ureq`.
///
/// Response status codes are deliberately not inspected: any body, including
/// an error page on a non-2xx response, is written verbatim. The signature
/// and archive checks downstream are the effective failure signal for such
/// responses. See the crate documentation for the rationale.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Build a fetcher whose requests carry the crate's User-Agent, with
    /// `user_agent_suffix` appended when non-empty.
    #[must_use]
    pub fn new(user_agent_suffix: &str) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(DOWNLOAD_TIMEOUT))
            .http_status_as_error(false)
            .user_agent(user_agent(user_agent_suffix))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl ReleaseFetcher for HttpFetcher {
    fn fetch(&self, dest: &Path, url: &str) -> Result<(), DownloadError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| DownloadError::Transport {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;
        let mut file = std::fs::File::create(dest)?;
        std::io::copy(&mut response.into_body().as_reader(), &mut file)?;
        Ok(())
    }
}

/// Assemble the outbound User-Agent string.
fn user_agent(suffix: &str) -> String {
    let mut agent = format!("tfinstall/{}", env!("CARGO_PKG_VERSION"));
    if !suffix.is_empty() {
        agent.push(' ');
        agent.push_str(suffix);
    }
    agent
}
