//! Finhealth CLI - Command-line interface for financial-health assessment.
//!
//! # Usage
//!
//! ```bash
//! # Assess a snapshot stored as JSON (a single object or an array)
//! finhealth assess --input snapshot.json
//!
//! # Read from stdin and print JSON
//! cat snapshot.json | finhealth --format json assess --input -
//!
//! # Inline figures, Hindi labels
//! finhealth assess --business-name "Apex Traders" --industry Retail --region Goa \
//!     --revenue 1250000 --expenses 860000 --language hi
//!
//! # List locale tables
//! finhealth locales
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format;

    match cli.command {
        Commands::Assess(args) => commands::assess::execute(args, format)?,
        Commands::Locales(args) => commands::locales::execute(args, format)?,
    }

    Ok(())
}
