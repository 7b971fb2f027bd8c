//! Crawls the AMS club directory and writes `clubs.json`
//!
//! Takes no arguments. Log verbosity follows `RUST_LOG` (default: info).

use amsclubs_core::{ClubScraper, Result};
use log::LevelFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let scraper = ClubScraper::new()?;

    println!("Scanning AMS directory pages…");
    let directory = scraper.run().await?;

    let output_path = &scraper.config().output_path;
    directory.write_to(output_path)?;

    println!(
        "Saved {} clubs to {}",
        directory.clubs.len(),
        output_path.display()
    );
    Ok(())
}
