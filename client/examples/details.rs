//! Print the detail page of one Pokemon.
//!
//! cargo run --example details -- 25

use std::env;

use anyhow::Result;
use pokedex_client::{CancelToken, PokedexClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let id = env::args().nth(1).unwrap_or_else(|| "25".to_string());
    let client = PokedexClient::new()?;

    println!("Fetching #{}...", id);
    let record = client.get_details(&id, &CancelToken::new()).await?;

    let tags: Vec<String> = record.type_tags().iter().map(|t| t.display_name()).collect();
    println!("\n=== #{:04} {} ===", record.id, record.name);
    println!("Types:   {}", tags.join(" / "));
    println!("Height:  {:.1} m", record.height_m());
    println!("Weight:  {:.1} kg", record.weight_kg());
    println!("Capture: {}", record.capture_rate);

    println!("\nAbilities:");
    for ability in &record.abilities {
        let hidden = if ability.is_hidden { " (versteckt)" } else { "" };
        println!("  • {}{}", ability.name, hidden);
    }

    println!("\nBase stats:");
    for stat in &record.stats {
        println!("  {:<16} {:>3}", stat.name, stat.base_stat);
    }
    println!("  {:<16} {:>3}", "total", record.base_stat_total);

    println!("\nEvolution:");
    for stage in &record.evolution_chain {
        println!("  {}", stage.name);
        for branch in &stage.evolves_to {
            println!("    └─ {} ({})", branch.name, branch.condition);
        }
    }

    println!("\nMoves ({} of {}):", record.display_moves().len(), record.moves.len());
    for m in record.display_moves() {
        println!(
            "  {:<20} {:<10} Stärke {:>3}  Gen. {:>3}  AP {:>2}",
            m.name,
            m.move_type,
            m.power_label(),
            m.accuracy_label(),
            m.pp_label()
        );
        println!("    {}", m.effect);
    }

    Ok(())
}
