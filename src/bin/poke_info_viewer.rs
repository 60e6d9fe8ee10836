//! Interactive viewer showing types, size and base stats of a Pokémon
//! fetched from the PokeAPI.
//!
//! Usage:
//!   cargo run --bin poke-info-viewer

use poke_info::api::PokeApiClient;
use poke_info::view::{run_viewer, InfoViewer, InquireFrontend};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    poke_info::logging::init();

    let mut viewer = InfoViewer::new(PokeApiClient::from_env());
    let mut frontend = InquireFrontend::new();
    run_viewer(&mut viewer, &mut frontend).await?;

    println!("👋 Bye!");
    Ok(())
}
