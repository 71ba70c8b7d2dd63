//! # Guardia Enforcement Desk
//!
//! Line-oriented operator console for the helmet enforcement desk.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults, then `GUARDIA_*` environment overrides)
//! 2. Install the log subscriber (`RUST_LOG` wins over the configured level)
//! 3. Validate configuration and assemble the desk
//! 4. Serve commands from stdin until `quit`, EOF or Ctrl+C
//! 5. Stop the lifecycle scheduler

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use enforcement_runtime::handlers::console::{self, Command};
use enforcement_runtime::{assemble, load_config, EnforcementDesk};

/// Run one command. Returns `false` when the operator asked to quit.
async fn dispatch(desk: &EnforcementDesk, command: Command) -> bool {
    let output = match command {
        Command::Overview => console::render_overview(&desk.overview()),
        Command::Capture(image_ref) => match desk.process_capture(&image_ref).await {
            Ok(outcome) => console::render_capture(&outcome),
            Err(e) => format!("capture failed: {}", e),
        },
        Command::Log(term) => console::render_log(&desk.log(term.as_deref())),
        Command::Enter(plate) => match desk.enter_manually(&plate).await {
            Ok(violation) => console::render_violation(&violation),
            Err(e) => format!("entry failed: {}", e),
        },
        Command::Pay(id) => {
            println!("processing payment for {} ...", id);
            match desk.settle(&id).await {
                Ok(settlement) => console::render_settlement(&settlement),
                Err(e) => format!("payment failed: {}", e),
            }
        }
        Command::Track(id) => match desk.track(&id) {
            Ok(report) => console::render_tracking(&report),
            Err(e) => format!("tracking failed: {}", e),
        },
        Command::Help => console::HELP.to_string(),
        Command::Quit => return false,
    };
    println!("{}", output);
    true
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = load_config();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("===========================================");
    info!("  Guardia Enforcement Desk v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let desk = assemble(&config).context("Failed to assemble enforcement desk")?;
    info!("Desk is ready. Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read command")?,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received");
                None
            }
        };
        let Some(line) = line else { break };

        match Command::parse(&line) {
            Ok(Some(command)) => {
                if !dispatch(&desk, command).await {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => println!("{}", e),
        }
    }

    // Graceful shutdown
    if let Err(e) = desk.shutdown().await {
        warn!("Scheduler did not stop cleanly: {}", e);
    }
    info!("Shutdown complete");

    Ok(())
}
