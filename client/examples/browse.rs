//! Load the browse list, optionally filtered by types, and print it.
//!
//! cargo run --example browse -- [search] [type] [type]

use std::env;

use anyhow::{Result, bail};
use pokedex_client::{Browser, Phase, PokedexClient, Type};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = env::args().skip(1);
    let search = args.next().unwrap_or_default();
    let types = args
        .map(|arg| Type::from_api(&arg).ok_or_else(|| anyhow::anyhow!("Unknown type: {}", arg)))
        .collect::<Result<Vec<_>>>()?;

    let mut browser = Browser::new(PokedexClient::new()?);
    println!("Loading Pokedex...");

    let mut phase = browser.mount().await;
    for t in types {
        phase = browser.toggle_type(t).await;
    }
    if phase == Phase::Error {
        bail!("Failed to load the Pokemon list");
    }

    browser.set_search(search);
    let state = browser.state();
    println!(
        "Types: {}  |  {} loaded, more: {}\n",
        state.selection_label(),
        state.summaries().len(),
        state.has_more()
    );

    let filtered = state.filtered();
    if let Some(message) = state.no_results_message() {
        println!("{}", message);
    }
    for entry in filtered {
        let tags: Vec<String> = entry.types.iter().map(|t| t.display_name()).collect();
        println!("#{:04} {:<16} {}", entry.id, entry.name, tags.join(" / "));
    }

    Ok(())
}
