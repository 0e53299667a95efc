//! Web map URL building and parsing.

/// Base URL for the web map query form.
pub const MAP_URL_BASE: &str = "https://maps.google.com/maps";

/// Build the web map URL for a coordinate.
///
/// Form: `https://maps.google.com/maps?q=<lat>,<lon>`.
pub fn map_url(latitude: f64, longitude: f64) -> String {
    format!("{}?q={},{}", MAP_URL_BASE, latitude, longitude)
}

/// Parse a coordinate back out of a web map URL in the `?q=<lat>,<lon>`
/// form. Returns `None` for anything else.
pub fn parse_map_url(url: &str) -> Option<(f64, f64)> {
    let query = url.split_once("?q=")?.1;
    let (lat, lon) = query.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}
