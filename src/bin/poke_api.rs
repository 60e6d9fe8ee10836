//! Fetch a single Pokémon from the PokeAPI and print the raw record.
//!
//! Usage:
//!   cargo run --bin poke-api

use poke_info::api::PokeApiClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();
    poke_info::logging::init();

    let client = PokeApiClient::from_env();
    if let Some(record) = client.get_pokemon_info("Rockruff").await {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    Ok(())
}
