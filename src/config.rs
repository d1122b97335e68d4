//! Client configuration
//!
//! A [`ClientConfig`] carries the two static settings a client needs for its
//! whole lifetime: the merchant API key and the base URL of the transaction
//! service. It can be built in code or loaded from a JSON document.

use crate::{MzuniPayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/transaction";

/// Path of the one-time merchant payment endpoint, relative to the base URL
pub const ONE_TIME_PAYMENT_PATH: &str = "/merchant/one-time";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "x-api-key";

/// Static configuration for a [`crate::MzuniPayClient`]
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Merchant API key sent in the `x-api-key` header
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the transaction service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config for the given API key and the default base URL
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Parse a config from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Check that the API key is present and the base URL is usable
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(MzuniPayError::config("API Key is required."));
        }
        self.payment_endpoint().map(|_| ())
    }

    /// Resolve `{base_url}/merchant/one-time`
    pub fn payment_endpoint(&self) -> Result<Url> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(MzuniPayError::config("Base URL cannot be empty"));
        }

        let url = Url::parse(&format!("{}{}", base, ONE_TIME_PAYMENT_PATH))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(MzuniPayError::config(format!(
                "Unsupported base URL scheme: {}",
                other
            ))),
        }
    }
}
