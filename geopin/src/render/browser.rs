//! Browser renderer: opens a web map URL in the default browser.

use tracing::info;

use super::url::map_url;
use super::{Renderer, RenderError};

/// Opens `https://maps.google.com/maps?q=<lat>,<lon>` in the default
/// browser.
///
/// The browser owns its own window loop; this renderer returns as soon as
/// the launch is handed off, so it never blocks the session event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRenderer;

impl BrowserRenderer {
    /// Create a browser renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for BrowserRenderer {
    fn render(&mut self, latitude: f64, longitude: f64, _accuracy: f64) -> Result<(), RenderError> {
        let url = map_url(latitude, longitude);
        info!(%url, "opening web map");
        open::that(url.as_str())?;
        Ok(())
    }
}
