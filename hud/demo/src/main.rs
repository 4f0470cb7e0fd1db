//! HUD Demo - Overlay Scenarios on a Logging Surface
//!
//! Embeds the hud-core controller with a surface that narrates everything
//! the overlay does: attaches, view snapshots, detaches. The catalog covers
//! the three presentation kinds across the three built-in styles, plus a
//! long-running task that streams progress updates into the overlay.
//!
//! # Usage
//!
//! ```bash
//! # Run every scenario in sequence
//! hud-demo
//!
//! # Run one scenario
//! hud-demo --scenario long-task
//!
//! # List scenarios
//! hud-demo --list
//!
//! # Print raw view snapshots as JSON
//! hud-demo --scenario activity-dark --json
//!
//! # Verbose logging
//! RUST_LOG=debug hud-demo
//! ```

mod scenarios;
mod trace_surface;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use hud_core::{Overlay, OverlayConfig};

use trace_surface::TraceSurface;

/// Demo embedder for the hud-core message overlay
#[derive(Parser, Debug)]
#[command(name = "hud-demo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario to run (default: all, see --list)
    #[arg(short, long, env = "HUD_DEMO_SCENARIO")]
    scenario: Option<String>,

    /// List available scenarios and exit
    #[arg(long)]
    list: bool,

    /// Print view snapshots as JSON instead of summary log lines
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "HUD_DEMO_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

/// Initialize logging with the specified level
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!("hud_demo={level},hud_core={level}"))
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    if args.list {
        for scenario in scenarios::catalog() {
            println!("{:<20} {}", scenario.name, scenario.description);
        }
        return Ok(());
    }

    info!("HUD demo starting");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let surface = TraceSurface::new(args.json);
    let (overlay, hud) = Overlay::new(surface, OverlayConfig::from_env());
    let controller = tokio::spawn(overlay.run());

    let result = match args.scenario.as_deref() {
        Some(name) => scenarios::run(name, &hud).await,
        None => scenarios::run_all(&hud).await,
    };

    // Dropping the last handle stops the owner loop.
    drop(hud);
    controller.await?;

    match result {
        Ok(()) => {
            info!("HUD demo finished");
            Ok(())
        }
        Err(error) => {
            tracing::error!(%error, "demo scenario failed");
            Err(error)
        }
    }
}
