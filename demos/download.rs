//! Example: Download a file from a bridge
//!
//! Usage:
//!   cargo run --example download -- [--config FILE] [--url URL] [--proxy PROXY] [--new-window] <REMOTE_PATH> [LOCAL_DIR]

mod cli;

use cli::{config_from_parser, init_tracing, usage_and_exit, ArgParser};
use fmbridge::error::Result;
use fmbridge::{Download, FileManager, Item, ItemKind};

const USAGE: &str = "Usage: cargo run --example download -- [--config FILE] [--url URL] [--proxy PROXY] [--new-window] <REMOTE_PATH> [LOCAL_DIR]";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let mut config = config_from_parser(&mut parser, USAGE);
    let new_window = parser.take_flag(&["--new-window"]);
    let positionals = parser.remaining();
    if positionals.is_empty() || positionals.len() > 2 {
        usage_and_exit(USAGE);
    }
    if let Some(dir) = positionals.get(1) {
        config.download_dir = dir.into();
    }

    let manager = FileManager::new(&config)?;
    let item = Item::from_path(&positionals[0], ItemKind::File);

    match manager.download(&item, new_window) {
        Download::Dispatched(fut) => {
            println!("Downloading: {}", positionals[0]);
            let data = fut.await?;
            println!(
                "Saved {} bytes to {}",
                data.len(),
                config.download_dir.join(&item.name).display()
            );
        }
        Download::Delegated(url) => println!("Open in a browser: {}", url),
        Download::Skipped => println!("Nothing to download"),
    }

    Ok(())
}
