use std::fmt::Display;

use serde_json::Value;
use tracing::{debug, error, info};

use super::config::ClientConfig;
use super::error::FetchError;
use super::transport::{HttpTransport, ReqwestTransport};

/// Convert an identifier to text, trim it and lowercase it.
pub fn normalize_identifier(pokemon: impl Display) -> String {
    pokemon.to_string().trim().to_lowercase()
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Client for the PokeAPI pokemon endpoint
pub struct PokeApiClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl PokeApiClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Self {
        let transport = ReqwestTransport::new(&config);
        Self { config, transport }
    }

    /// Create a client from `POKE_API_URL`, falling back to the public API.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}

impl<T: HttpTransport> PokeApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// URL that a lookup for `pokemon` would request, or `None` for an empty
    /// identifier.
    pub fn request_url(&self, pokemon: impl Display) -> Option<String> {
        let id = normalize_identifier(pokemon);
        if id.is_empty() {
            return None;
        }
        Some(self.url_for(&id))
    }

    fn url_for(&self, id: &str) -> String {
        format!("{}/{}", self.config.base(), id)
    }

    /// Fetch the raw creature record for `pokemon`.
    ///
    /// The body is returned as parsed JSON without any check on its shape.
    pub async fn fetch(&self, pokemon: impl Display) -> Result<Value, FetchError> {
        let id = normalize_identifier(pokemon);
        if id.is_empty() {
            return Err(FetchError::EmptyIdentifier);
        }
        self.fetch_normalized(&id).await
    }

    async fn fetch_normalized(&self, id: &str) -> Result<Value, FetchError> {
        let url = self.url_for(id);
        debug!(%url, "GET");

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                url,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Get information about a Pokémon by name or Pokédex number.
    ///
    /// Failures are logged and reported as `None`:
    /// - the identifier is empty after trimming
    /// - the server answers with a non-2xx status
    /// - the request fails or the body is not JSON
    pub async fn get_pokemon_info(&self, pokemon: impl Display) -> Option<Value> {
        let id = normalize_identifier(pokemon);
        if id.is_empty() {
            error!("Error: {}", FetchError::EmptyIdentifier);
            return None;
        }

        info!("Getting information for {}...", capitalize(&id));
        match self.fetch_normalized(&id).await {
            Ok(record) => {
                info!("success");
                Some(record)
            }
            Err(e) => {
                error!("failure\nError: {}", e);
                None
            }
        }
    }
}
