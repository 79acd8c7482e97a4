//! Example: List a folder on a bridge
//!
//! Usage:
//!   cargo run --example ls -- [--config FILE] [--url URL] [--proxy PROXY] [PATH]

mod cli;

use cli::{init_tracing, parse_connection, segments, usage_and_exit};
use fmbridge::error::Result;
use fmbridge::FileRef;

const USAGE: &str =
    "Usage: cargo run --example ls -- [--config FILE] [--url URL] [--proxy PROXY] [PATH]";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let conn = parse_connection(USAGE);
    if conn.positionals.len() > 1 {
        usage_and_exit(USAGE);
    }
    let path = conn.positionals.first().cloned().unwrap_or_default();

    let manager = conn.connect()?;
    println!("Listing: /{}\n", segments(&path).join("/"));

    let items = manager.list_items(&segments(&path)).await?;
    for item in &items {
        let marker = if item.is_folder() { "d" } else { "-" };
        println!(
            "{} {:>10} {:<20} {}",
            marker,
            item.size,
            item.date.as_deref().unwrap_or(""),
            item.name
        );
    }
    println!("\n{} item(s)", items.len());

    Ok(())
}
