//! Ripple - Entry Point
//!
//! Binary entry point for the `ripple` command line.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ripple analyze` | Analyze a source change and print the impact report as JSON |
//! | `ripple providers` | List registered similarity and embedding providers |

// Force-link ripple-providers to ensure linkme inventory registrations are included
extern crate ripple_providers;

use clap::Parser;
use ripple::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
