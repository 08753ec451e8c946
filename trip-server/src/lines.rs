//! Static transit-line geometry.
//!
//! Each tram line ships as a GeoJSON file whose features carry
//! `MultiLineString` geometry. Only the first line string of each feature
//! is the line's drawn trace; the rest are service branches the map does
//! not show. Positions are GeoJSON order, `[lon, lat]`.

use std::path::Path;

use geojson::{GeoJson, Value};

use crate::domain::Coord;

/// Error returned when loading a transit line.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// Could not read the file
    #[error("failed to read line file: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid GeoJSON
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] geojson::Error),

    /// No MultiLineString feature in the file
    #[error("no line geometry in file")]
    NoGeometry,

    /// A position is not a usable coordinate
    #[error("position is not a valid coordinate")]
    BadCoordinate,
}

/// The drawn trace of one transit line.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitLine {
    /// Line name, e.g. "A".
    pub name: String,
    /// The points forming the line's trace.
    pub coords: Vec<Coord>,
}

impl TransitLine {
    /// Load a line's trace from a GeoJSON file.
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, LineError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_geojson(name, &raw)
    }

    /// Parse a line's trace from GeoJSON text.
    pub fn from_geojson(name: impl Into<String>, raw: &str) -> Result<Self, LineError> {
        let geojson: GeoJson = raw.parse()?;

        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(LineError::NoGeometry);
        };

        let mut coords = Vec::new();
        let mut saw_geometry = false;

        for feature in &collection.features {
            let Some(geometry) = &feature.geometry else {
                continue;
            };
            let Value::MultiLineString(line_strings) = &geometry.value else {
                continue;
            };
            let Some(first) = line_strings.first() else {
                continue;
            };

            saw_geometry = true;
            for position in first {
                let (lon, lat) = match position.as_slice() {
                    [lon, lat, ..] => (*lon, *lat),
                    _ => return Err(LineError::BadCoordinate),
                };
                let coord = Coord::new(lat, lon).map_err(|_| LineError::BadCoordinate)?;
                coords.push(coord);
            }
        }

        if !saw_geometry {
            return Err(LineError::NoGeometry);
        }

        Ok(TransitLine {
            name: name.into(),
            coords,
        })
    }
}

/// Display color for a tram line, by name.
pub fn line_color(name: &str) -> &'static str {
    match name {
        "A" => "blue",
        "B" => "green",
        "C" => "red",
        "D" => "orange",
        "E" => "purple",
        _ => "gray",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LINE_A: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "ligne": "A" },
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [
                        [ [5.7144, 45.1914], [5.7253, 45.1989] ],
                        [ [5.7000, 45.1800] ]
                    ]
                }
            }
        ]
    }"#;

    #[test]
    fn parses_first_line_string() {
        let line = TransitLine::from_geojson("A", LINE_A).unwrap();

        assert_eq!(line.name, "A");
        assert_eq!(line.coords.len(), 2);
        // Positions are lon,lat; coordinates come out lat,lon.
        assert_eq!(line.coords[0].lat(), 45.1914);
        assert_eq!(line.coords[0].lon(), 5.7144);
    }

    #[test]
    fn skips_non_line_features() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": { "type": "Point", "coordinates": [5.7, 45.19] }
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "MultiLineString",
                        "coordinates": [ [ [5.7144, 45.1914] ] ]
                    }
                }
            ]
        }"#;

        let line = TransitLine::from_geojson("B", raw).unwrap();
        assert_eq!(line.coords.len(), 1);
    }

    #[test]
    fn no_line_geometry_is_an_error() {
        let raw = r#"{ "type": "FeatureCollection", "features": [] }"#;
        assert!(matches!(
            TransitLine::from_geojson("C", raw),
            Err(LineError::NoGeometry)
        ));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            TransitLine::from_geojson("C", "{ not geojson"),
            Err(LineError::Json(_))
        ));
    }

    #[test]
    fn out_of_range_position_is_an_error() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "MultiLineString",
                        "coordinates": [ [ [5.7144, 95.0] ] ]
                    }
                }
            ]
        }"#;

        assert!(matches!(
            TransitLine::from_geojson("D", raw),
            Err(LineError::BadCoordinate)
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LINE_A.as_bytes()).unwrap();

        let line = TransitLine::from_file("A", file.path()).unwrap();
        assert_eq!(line.coords.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = TransitLine::from_file("A", "/nonexistent/tram_a.geojson");
        assert!(matches!(result, Err(LineError::Io(_))));
    }

    #[test]
    fn line_colors() {
        assert_eq!(line_color("A"), "blue");
        assert_eq!(line_color("E"), "purple");
        assert_eq!(line_color("Z"), "gray");
    }
}
