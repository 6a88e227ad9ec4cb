//! Remote installer script retrieval.
//!
//! The Homebrew, nvm, and rustup installers are fetched over HTTPS and
//! handed to the shell. The scripts are assumed idempotent and trusted;
//! no integrity verification is performed beyond TLS.

use crate::error::{BasecampError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Fetches installer scripts over HTTPS.
pub struct ScriptFetcher {
    client: Client,
    timeout: Duration,
}

impl ScriptFetcher {
    /// Create a new fetcher with default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("basecamp")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a script body from a URL.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().map_err(|e| BasecampError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(BasecampError::Fetch {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        response.text().map_err(|e| BasecampError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for ScriptFetcher {
    fn default() -> Self {
        Self::new()
    }
}
