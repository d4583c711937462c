use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use monopoly_cards::cli::Args;
use monopoly_cards::config::Settings;
use monopoly_cards::render_deck;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let settings = Settings::from_args(&args);

    let pdf_data =
        render_deck(&settings).with_context(|| "Failed to generate card sheets PDF")?;

    fs::write(&args.output, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", args.output.display()))?;

    println!("Successfully wrote PDF to {}", args.output.display());

    Ok(())
}
