//! Location provider abstraction
//!
//! This module provides the trait and production implementation for talking
//! to the system location service: creating a session, configuring the
//! requested accuracy, starting and stopping streaming, and subscribing to
//! position-update notifications.
//!
//! The production implementation is [`GeoClueProvider`], which speaks the
//! GeoClue2 protocol over the D-Bus system bus.
//!
//! ```ignore
//! use geopin::provider::{GeoClueProvider, LocationProvider};
//!
//! let provider = GeoClueProvider::connect().await?;
//! let session = provider.create_session("geopin.desktop").await?;
//! provider.configure(&session, AccuracyLevel::Exact).await?;
//! let mut updates = provider.subscribe(&session).await?;
//! provider.start(&session).await?;
//! ```

mod geoclue;
mod types;

pub use geoclue::{GeoClueProvider, GeoClueSession};
pub use types::{LocationProvider, ProviderError};
