//! ltc-dashboard — terminal version of the warehouse logistics dashboard.
//!
//! Trucks scatter around the warehouse, get routed to waiting areas in the
//! Buffer Zone and take turns at the single dock.  The screen is redrawn
//! every tick; type a command and press Enter:
//!
//! ```text
//! p  pause/resume    c  manual check    r  reset    d  dump JSON    q  quit
//! ```
//!
//! See `settings.rs` for the environment variables it reads.

mod render;
mod settings;
mod world;

use anyhow::Result;
use ltc_output::{CsvWriter, SnapshotRecorder};
use ltc_sim::EngineBuilder;
use tokio::sync::mpsc;

use crate::settings::{COMMAND_CHANNEL_CAPACITY, Settings};
use crate::world::{Command, Recording, read_commands, world_task};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout belongs to the dashboard.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = Settings::from_env()?;
    let engine = EngineBuilder::new(settings.sim.clone()).build()?;
    tracing::info!(
        trucks = engine.fleet().len(),
        waiting_areas = engine.waiting_areas().len(),
        docks = engine.max_docks(),
        seed = engine.config.seed,
        interval_ms = engine.config.tick_interval_ms,
        "engine ready"
    );

    let recording = match &settings.output_dir {
        Some(dir) => {
            let writer = CsvWriter::new(dir)?;
            tracing::info!(dir = %dir.display(), "recording CSV output");
            Recording(Some(SnapshotRecorder::new(writer, &settings.sim)))
        }
        None => Recording(None),
    };

    let (command_tx, command_rx) = mpsc::channel::<Command>(COMMAND_CHANNEL_CAPACITY);
    tokio::spawn(read_commands(command_tx));

    world_task(engine, recording, command_rx, settings.render).await;
    Ok(())
}
