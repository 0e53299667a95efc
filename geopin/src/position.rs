//! Resolved position values delivered per update notification.

use std::fmt;

/// Valid latitude range in decimal degrees.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range in decimal degrees.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A resolved position delivered by one update notification.
///
/// Immutable value with no identity beyond its fields; one is produced fresh
/// per notification while the owning session is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRecord {
    /// Latitude in decimal degrees, positive north.
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east.
    pub longitude: f64,
    /// Horizontal accuracy radius in meters, as reported by the provider.
    pub accuracy: f64,
}

impl PositionRecord {
    /// Create a new position record.
    pub fn new(latitude: f64, longitude: f64, accuracy: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy,
        }
    }

    /// Whether the coordinate lies within the valid lat/lon ranges.
    pub fn in_bounds(&self) -> bool {
        (MIN_LAT..=MAX_LAT).contains(&self.latitude)
            && (MIN_LON..=MAX_LON).contains(&self.longitude)
    }
}

impl fmt::Display for PositionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6}, {:.6} (±{:.0}m)",
            self.latitude, self.longitude, self.accuracy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_holds_values() {
        let record = PositionRecord::new(48.8566, 2.3522, 10.0);
        assert_eq!(record.latitude, 48.8566);
        assert_eq!(record.longitude, 2.3522);
        assert_eq!(record.accuracy, 10.0);
    }

    #[test]
    fn test_records_compare_by_value() {
        let a = PositionRecord::new(48.8566, 2.3522, 10.0);
        let b = PositionRecord::new(48.8566, 2.3522, 10.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_in_bounds() {
        assert!(PositionRecord::new(48.8566, 2.3522, 10.0).in_bounds());
        assert!(PositionRecord::new(-90.0, 180.0, 0.0).in_bounds());
        assert!(!PositionRecord::new(91.0, 0.0, 0.0).in_bounds());
        assert!(!PositionRecord::new(0.0, -180.5, 0.0).in_bounds());
    }

    #[test]
    fn test_display_format() {
        let record = PositionRecord::new(48.8566, 2.3522, 12.4);
        let text = record.to_string();
        assert!(text.contains("48.856600"));
        assert!(text.contains("2.352200"));
        assert!(text.contains("12m") || text.contains("±12"));
    }
}
