use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MagnetError, Result};

pub const API_KEY_VAR: &str = "MAGNET_API_KEY";
pub const API_URL_VAR: &str = "MAGNET_API_URL";
pub const VERSION_VAR: &str = "MAGNET_CLI_VERSION";

pub const DEFAULT_BASE_URL: &str = "https://www.magnet.run";

/// Page size sent when `--cursor` is given without a positive `--limit`.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

// xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx where y is 8, 9, a or b
static API_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
    )
    .expect("API key pattern is valid")
});

/// A validated Magnet API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Trim and validate a raw key. Hex case is preserved.
    pub fn parse(raw: &str) -> Result<Self> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(MagnetError::MissingApiKey);
        }
        if !API_KEY_REGEX.is_match(key) {
            return Err(MagnetError::InvalidApiKey);
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Settings read from the environment at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    api_key: Option<String>,
    api_url: Option<String>,
    version: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: lookup(API_KEY_VAR),
            api_url: lookup(API_URL_VAR),
            version: lookup(VERSION_VAR),
        }
    }

    /// Get the validated API key. Checked once, before any request is built.
    pub fn api_key(&self) -> Result<ApiKey> {
        ApiKey::parse(self.api_key.as_deref().unwrap_or_default())
    }

    /// Like [`Config::api_key`], but reports the problem on stderr and exits 1.
    pub fn api_key_or_exit(&self) -> ApiKey {
        match self.api_key() {
            Ok(key) => key,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    /// Base URL with surrounding whitespace and every trailing slash removed.
    pub fn base_url(&self) -> String {
        let raw = self
            .api_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        normalize_base_url(raw)
    }

    /// Version shown in `--version` and the help banner.
    pub fn version(&self) -> String {
        self.version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(env!("CARGO_PKG_VERSION"))
            .to_string()
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
