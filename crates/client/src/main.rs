//! Boss-guessing chat bot binary.
//!
//! # Startup
//!
//! 1. Load `.env` and [`BotConfig`] from the environment
//! 2. Setup logging
//! 3. Load the boss dataset (fatal on failure)
//! 4. Spawn the liveness endpoint
//! 5. Serve commands from the console until it closes
//!
//! ```bash
//! DATASET_PATH=crates/game/content/data/bosses.json cargo run -p hkdle-bot
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use client_bootstrap::{BotBuilder, BotConfig};
use client_frontend_cli::{ConsoleTransport, logging, serve};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // Flushes the log file on drop.
    let _guard = match logging::setup_logging(config.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to setup logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let wait_on_fatal = config.wait_on_fatal;
    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal error: {:#}", e);
            if wait_on_fatal {
                wait_for_enter();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(config: BotConfig) -> Result<()> {
    tracing::info!("Starting bot");
    tracing::info!("Dataset source: {}", config.dataset.describe());

    let setup = BotBuilder::new(config).build().await?;
    tracing::info!(bosses = setup.runtime.dataset().len(), "Runtime built");

    let port = setup.config.port;
    tokio::spawn(async move {
        if let Err(e) = hkdle_bot::serve_liveness(port).await {
            tracing::error!("Liveness endpoint failed: {:#}", e);
        }
    });

    let mut transport = ConsoleTransport::stdio();
    serve(&setup.dispatcher, &mut transport).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn wait_for_enter() {
    eprint!("Press Enter to exit...");
    let _ = io::stderr().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
