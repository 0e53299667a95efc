//! Map renderer abstraction
//!
//! The session core only needs a capability that can display a resolved
//! position; everything about toolkits, browsers and windows lives behind
//! the [`Renderer`] trait. Two variants ship with the library:
//!
//! - [`TileMapRenderer`] - renders an OpenStreetMap tile map with a marker
//!   pin and accuracy circle, then opens the image in the platform viewer.
//! - [`BrowserRenderer`] - opens a web map URL in the default browser.
//!
//! Callers never need to know which variant is active; the CLI picks one
//! from its `--display` flag and hands it to the dispatcher as a boxed
//! trait object.

mod browser;
mod tile;
mod url;

pub use browser::BrowserRenderer;
pub use tile::{TileMapConfig, TileMapRenderer};
pub use url::{map_url, parse_map_url};

/// Errors that can occur while rendering a position.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Failed to build or encode the map image.
    #[error("map rendering failed: {0}")]
    Map(String),

    /// Failed to hand the result off to the platform viewer or browser.
    #[error("failed to launch viewer: {0}")]
    Launch(#[from] std::io::Error),
}

/// Capability for displaying a resolved position.
///
/// A renderer may legitimately block for the duration of the session (for
/// example a GUI main loop); in that mode further updates are only
/// processed once it yields control back to the event loop.
pub trait Renderer {
    /// Display the position. `accuracy` is the horizontal accuracy radius
    /// in meters.
    fn render(&mut self, latitude: f64, longitude: f64, accuracy: f64) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, latitude: f64, longitude: f64, accuracy: f64) -> Result<(), RenderError> {
        (**self).render(latitude, longitude, accuracy)
    }
}
