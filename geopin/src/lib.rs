//! geopin - show the current device location on a map
//!
//! This library provides the core functionality for negotiating a location
//! session with the system location service (GeoClue2 over D-Bus) and
//! dispatching position updates to a map renderer.
//!
//! # High-Level API
//!
//! ```ignore
//! use geopin::config::SessionConfig;
//! use geopin::dispatch::UpdateDispatcher;
//! use geopin::provider::GeoClueProvider;
//! use geopin::render::TileMapRenderer;
//! use geopin::session::SessionController;
//!
//! let provider = GeoClueProvider::connect().await?;
//! let mut controller = SessionController::new(provider, SessionConfig::default());
//! let mut dispatcher = UpdateDispatcher::new(TileMapRenderer::default());
//!
//! controller.begin().await?;
//! let reason = controller.run(&mut dispatcher).await?;
//! ```

pub mod accuracy;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod position;
pub mod provider;
pub mod render;
pub mod session;

/// Version of the geopin library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
