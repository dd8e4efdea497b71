//! Command-line probe for the remote board store.
//!
//! Hydrates a store from the configured server and prints the board as JSON.
//!
//! # Environment Variables
//!
//! - `HOOPOE_SERVER_URL` — remote store base URL (default: the hosted
//!   deployment)
//! - `RUST_LOG` — log filter (e.g. `hoopoe_board=debug`)

use hoopoe_board::{BoardStore, SyncConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = SyncConfig::from_env();
    log::info!("Fetching board from {}", config.base_url);

    let mut store = BoardStore::new(&config)?;
    store.hydrate().await?;

    println!("{}", serde_json::to_string_pretty(store.board())?);
    Ok(())
}
