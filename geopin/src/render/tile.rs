//! Tile map renderer: OpenStreetMap tiles with a marker pin.

use std::path::PathBuf;

use staticmap::tools::{CircleBuilder, Color};
use staticmap::StaticMapBuilder;
use tracing::info;

use super::{Renderer, RenderError};

/// Meters per pixel at the equator for zoom level 0 with 256px tiles.
const METERS_PER_PIXEL_Z0: f64 = 156_543.033_92;

/// Highest zoom level common OSM tile servers serve; configured zooms are
/// clamped to this.
const MAX_TILE_ZOOM: u8 = 19;

/// Configuration for the tile map renderer.
#[derive(Debug, Clone)]
pub struct TileMapConfig {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Slippy-map zoom level to render at.
    pub zoom: u8,
    /// Tile server URL template.
    pub url_template: String,
    /// Where the rendered PNG is written.
    pub output: PathBuf,
    /// Whether to open the image in the platform viewer after writing.
    pub open_viewer: bool,
}

impl Default for TileMapConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            zoom: 17,
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            output: std::env::temp_dir().join("geopin-map.png"),
            open_viewer: true,
        }
    }
}

/// Renders the position on an OpenStreetMap tile map.
///
/// Draws a marker pin at the coordinate and a translucent circle scaled to
/// the reported accuracy radius, writes the composite to a PNG, and opens
/// it in the platform image viewer. Fetching tiles is a network round trip,
/// so a render blocks for the duration of the tile downloads.
#[derive(Debug, Clone, Default)]
pub struct TileMapRenderer {
    config: TileMapConfig,
}

impl TileMapRenderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: TileMapConfig) -> Self {
        Self { config }
    }

    /// Zoom level actually rendered at.
    fn zoom(&self) -> u8 {
        self.config.zoom.min(MAX_TILE_ZOOM)
    }

    /// Pixel radius covering `accuracy` meters at `latitude` for the
    /// configured zoom.
    fn accuracy_radius_px(&self, latitude: f64, accuracy: f64) -> f32 {
        let meters_per_pixel =
            METERS_PER_PIXEL_Z0 * latitude.to_radians().cos() / f64::from(1u32 << self.zoom());
        let px = accuracy / meters_per_pixel;
        // Keep the circle visible but inside the canvas.
        px.clamp(8.0, f64::from(self.config.width) / 2.0) as f32
    }
}

impl Renderer for TileMapRenderer {
    fn render(&mut self, latitude: f64, longitude: f64, accuracy: f64) -> Result<(), RenderError> {
        let mut map = StaticMapBuilder::default()
            .width(self.config.width)
            .height(self.config.height)
            .zoom(self.zoom())
            .lat_center(latitude)
            .lon_center(longitude)
            .url_template(self.config.url_template.clone())
            .build()
            .map_err(|e| RenderError::Map(format!("failed to create map: {}", e)))?;

        // Translucent accuracy circle under the pin.
        let accuracy_circle = CircleBuilder::default()
            .lat_coordinate(latitude)
            .lon_coordinate(longitude)
            .color(Color::new(true, 66, 133, 244, 70))
            .radius(self.accuracy_radius_px(latitude, accuracy))
            .build()
            .map_err(|e| RenderError::Map(format!("failed to draw accuracy circle: {}", e)))?;
        map.add_tool(accuracy_circle);

        let pin = CircleBuilder::default()
            .lat_coordinate(latitude)
            .lon_coordinate(longitude)
            .color(Color::new(true, 220, 38, 38, 255))
            .radius(6.0)
            .build()
            .map_err(|e| RenderError::Map(format!("failed to draw marker: {}", e)))?;
        map.add_tool(pin);

        map.save_png(&self.config.output)
            .map_err(|e| RenderError::Map(format!("failed to write map image: {}", e)))?;

        info!(
            path = %self.config.output.display(),
            zoom = self.zoom(),
            "map image rendered"
        );

        if self.config.open_viewer {
            open::that(&self.config.output)?;
        }
        Ok(())
    }
}
