//! Example: Create a folder on a bridge
//!
//! Usage:
//!   cargo run --example mkdir -- [--config FILE] [--url URL] [--proxy PROXY] <PATH>

mod cli;

use cli::{init_tracing, parse_connection, segments, usage_and_exit};
use fmbridge::error::Result;

const USAGE: &str =
    "Usage: cargo run --example mkdir -- [--config FILE] [--url URL] [--proxy PROXY] <PATH>";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let conn = parse_connection(USAGE);
    if conn.positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let mut parent = segments(&conn.positionals[0]);
    let name = match parent.pop() {
        Some(name) => name,
        None => usage_and_exit(USAGE),
    };

    let manager = conn.connect()?;
    println!("Creating folder: {}", conn.positionals[0]);
    match manager.create_folder(&name, &parent).await {
        Ok(_) => println!("Folder created successfully!"),
        Err(e) => eprintln!("Failed to create folder: {}", e),
    }

    Ok(())
}
