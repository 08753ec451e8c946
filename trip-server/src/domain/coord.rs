//! Geographic coordinate type.

use std::fmt;

/// Error returned when constructing an invalid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoord {
    reason: &'static str,
}

/// A validated latitude/longitude pair, in decimal degrees.
///
/// Latitude is in `[-90, 90]`, longitude in `[-180, 180]`, both finite.
/// This type guarantees that any `Coord` value is valid by construction.
///
/// `Display` renders `"lat,lon"`, which is the format the journey-planning
/// API expects for its `fromPlace`/`toPlace` parameters.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Coord;
///
/// let ensimag = Coord::new(45.1935, 5.7684).unwrap();
/// assert_eq!(ensimag.to_string(), "45.1935,5.7684");
///
/// // Out-of-range latitude is rejected
/// assert!(Coord::new(91.0, 5.7684).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coord {
    lat: f64,
    lon: f64,
}

impl Coord {
    /// Construct a coordinate from decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoord> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidCoord {
                reason: "latitude and longitude must be finite",
            });
        }

        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoord {
                reason: "latitude must be within [-90, 90]",
            });
        }

        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoord {
                reason: "longitude must be within [-180, 180]",
            });
        }

        Ok(Coord { lat, lon })
    }

    /// Parse a coordinate from a `"lat,lon"` string.
    pub fn parse(s: &str) -> Result<Self, InvalidCoord> {
        let (lat, lon) = s.split_once(',').ok_or(InvalidCoord {
            reason: "expected \"lat,lon\"",
        })?;

        let lat: f64 = lat.trim().parse().map_err(|_| InvalidCoord {
            reason: "latitude is not a number",
        })?;
        let lon: f64 = lon.trim().parse().map_err(|_| InvalidCoord {
            reason: "longitude is not a number",
        })?;

        Coord::new(lat, lon)
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({},{})", self.lat, self.lon)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        assert!(Coord::new(45.1935, 5.7684).is_ok());
        assert!(Coord::new(-90.0, -180.0).is_ok());
        assert!(Coord::new(90.0, 180.0).is_ok());
        assert!(Coord::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Coord::new(90.001, 0.0).is_err());
        assert!(Coord::new(-90.001, 0.0).is_err());
        assert!(Coord::new(0.0, 180.001).is_err());
        assert!(Coord::new(0.0, -180.001).is_err());
    }

    #[test]
    fn reject_non_finite() {
        assert!(Coord::new(f64::NAN, 0.0).is_err());
        assert!(Coord::new(0.0, f64::INFINITY).is_err());
        assert!(Coord::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn parse_valid() {
        let c = Coord::parse("45.1935,5.7684").unwrap();
        assert_eq!(c.lat(), 45.1935);
        assert_eq!(c.lon(), 5.7684);

        // Whitespace around the components is tolerated
        let c = Coord::parse(" 45.1935 , 5.7684 ").unwrap();
        assert_eq!(c.lat(), 45.1935);
    }

    #[test]
    fn parse_invalid() {
        assert!(Coord::parse("").is_err());
        assert!(Coord::parse("45.1935").is_err());
        assert!(Coord::parse("north,east").is_err());
        assert!(Coord::parse("95.0,5.7").is_err());
    }

    #[test]
    fn display_is_wire_format() {
        let c = Coord::new(45.1935, 5.7684).unwrap();
        assert_eq!(format!("{}", c), "45.1935,5.7684");
    }

    #[test]
    fn debug() {
        let c = Coord::new(45.0, 5.0).unwrap();
        assert_eq!(format!("{:?}", c), "Coord(45,5)");
    }
}
