//! Requested accuracy levels for a location session.
//!
//! GeoClue2 expresses requested accuracy as a sparse ordinal scale; the
//! variants here map onto those ordinals. Ordering is monotonic with
//! precision: `Country` is the coarsest, `Exact` the most precise.

use std::fmt;

/// Precision tier requested from the location provider.
///
/// Chosen once at configuration time and immutable for the lifetime of the
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccuracyLevel {
    /// Country-level accuracy.
    Country,
    /// City-level accuracy.
    City,
    /// Neighborhood-level accuracy.
    Neighborhood,
    /// Street-level accuracy.
    Street,
    /// Exact (GPS) accuracy.
    Exact,
}

impl AccuracyLevel {
    /// All levels, coarsest first.
    pub const ALL: [AccuracyLevel; 5] = [
        AccuracyLevel::Country,
        AccuracyLevel::City,
        AccuracyLevel::Neighborhood,
        AccuracyLevel::Street,
        AccuracyLevel::Exact,
    ];

    /// The GeoClue2 `RequestedAccuracyLevel` ordinal for this level.
    ///
    /// The scale is sparse: GeoClue2 reserves intermediate values for
    /// levels this utility does not request.
    pub fn ordinal(self) -> u32 {
        match self {
            AccuracyLevel::Country => 1,
            AccuracyLevel::City => 4,
            AccuracyLevel::Neighborhood => 5,
            AccuracyLevel::Street => 6,
            AccuracyLevel::Exact => 8,
        }
    }
}

impl fmt::Display for AccuracyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccuracyLevel::Country => "country",
            AccuracyLevel::City => "city",
            AccuracyLevel::Neighborhood => "neighborhood",
            AccuracyLevel::Street => "street",
            AccuracyLevel::Exact => "exact",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_match_geoclue_scale() {
        assert_eq!(AccuracyLevel::Country.ordinal(), 1);
        assert_eq!(AccuracyLevel::City.ordinal(), 4);
        assert_eq!(AccuracyLevel::Neighborhood.ordinal(), 5);
        assert_eq!(AccuracyLevel::Street.ordinal(), 6);
        assert_eq!(AccuracyLevel::Exact.ordinal(), 8);
    }

    #[test]
    fn test_ordering_is_monotonic_with_precision() {
        for pair in AccuracyLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should be coarser than {}", pair[0], pair[1]);
            assert!(
                pair[0].ordinal() < pair[1].ordinal(),
                "ordinals must rise with precision"
            );
        }
        assert_eq!(AccuracyLevel::ALL.last(), Some(&AccuracyLevel::Exact));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(AccuracyLevel::Exact.to_string(), "exact");
        assert_eq!(AccuracyLevel::Neighborhood.to_string(), "neighborhood");
    }
}
