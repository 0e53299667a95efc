//! geopin CLI - show the current device location on a map
//!
//! Negotiates a GeoClue2 location session, waits for position updates, and
//! renders each one with the selected map renderer until the session times
//! out or ctrl-c is pressed.

mod error;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::info;

use geopin::accuracy::AccuracyLevel;
use geopin::config::SessionConfig;
use geopin::dispatch::UpdateDispatcher;
use geopin::logging::{default_log_dir, default_log_file, init_logging};
use geopin::provider::GeoClueProvider;
use geopin::render::{BrowserRenderer, Renderer, TileMapConfig, TileMapRenderer};
use geopin::session::SessionController;

use error::CliError;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisplayKind {
    /// OpenStreetMap tile map with a marker pin (rendered locally)
    Osm,
    /// Google Maps in the default browser
    Google,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AccuracyArg {
    Country,
    City,
    Neighborhood,
    Street,
    Exact,
}

impl From<AccuracyArg> for AccuracyLevel {
    fn from(arg: AccuracyArg) -> Self {
        match arg {
            AccuracyArg::Country => AccuracyLevel::Country,
            AccuracyArg::City => AccuracyLevel::City,
            AccuracyArg::Neighborhood => AccuracyLevel::Neighborhood,
            AccuracyArg::Street => AccuracyLevel::Street,
            AccuracyArg::Exact => AccuracyLevel::Exact,
        }
    }
}

#[derive(Parser)]
#[command(name = "geopin")]
#[command(about = "Show the current device location on a map", long_about = None)]
#[command(version = geopin::VERSION)]
struct Args {
    /// Map display to use
    #[arg(long, short = 'd', value_enum, default_value = "osm")]
    display: DisplayKind,

    /// Accuracy level to request from the location provider
    #[arg(long, value_enum, default_value = "exact")]
    accuracy: AccuracyArg,

    /// Session timeout in seconds; the session force-stops once this elapses
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Desktop id reported to the location provider
    #[arg(long, default_value = "geopin.desktop")]
    desktop_id: String,

    /// Enable debug-level logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        e.exit();
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let _logging_guard = init_logging(default_log_dir(), default_log_file(), args.debug)
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    info!("geopin v{}", geopin::VERSION);

    // Single-threaded cooperative loop: timer expiry and provider
    // notifications are both dispatched on this one runtime.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    runtime.block_on(run_session(args))
}

async fn run_session(args: Args) -> Result<(), CliError> {
    let provider = GeoClueProvider::connect().await.map_err(CliError::Provider)?;

    let config = SessionConfig {
        desktop_id: args.desktop_id,
        accuracy: args.accuracy.into(),
        timeout: Duration::from_secs(args.timeout),
    };

    let mut controller = SessionController::new(provider, config);

    // Ctrl-C requests a stop; the event loop handles it on its next turn.
    let stop = controller.stop_handle();
    ctrlc::set_handler(move || stop.request_stop())
        .map_err(|e| CliError::SignalHandler(e.to_string()))?;

    let renderer: Box<dyn Renderer> = match args.display {
        DisplayKind::Osm => Box::new(TileMapRenderer::new(TileMapConfig::default())),
        DisplayKind::Google => Box::new(BrowserRenderer::new()),
    };
    let mut dispatcher = UpdateDispatcher::new(renderer);

    controller.begin().await?;
    let reason = controller.run(&mut dispatcher).await?;

    info!(?reason, delivered = dispatcher.delivered(), "done");
    Ok(())
}
