//! PokeAPI client
//!
//! Fetches raw creature records from https://pokeapi.co/.

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{capitalize, normalize_identifier, PokeApiClient};
pub use config::{ClientConfig, DEFAULT_POKE_API_URL};
pub use error::FetchError;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
