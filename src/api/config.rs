use std::env;
use std::time::Duration;

/// Base URL of the PokeAPI pokemon endpoint.
pub const DEFAULT_POKE_API_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Environment variable that overrides [`DEFAULT_POKE_API_URL`].
pub const POKE_API_URL_ENV: &str = "POKE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` keeps the reqwest default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKE_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Reads `POKE_API_URL`, falling back to the public endpoint.
    pub fn from_env() -> Self {
        match env::var(POKE_API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    /// Base URL without trailing slashes.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
