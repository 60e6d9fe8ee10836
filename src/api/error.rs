use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No Pokémon name specified.")]
    EmptyIdentifier,

    #[error("{status} error for url: {url}")]
    Status { status: u16, url: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid JSON body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
