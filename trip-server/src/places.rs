//! Place search.
//!
//! A search query is free text ("gare", "piscine..."); resolving it to a
//! destination coordinate is a collaborator concern. The trait keeps the
//! aggregator independent of where candidates come from; the in-memory
//! gazetteer is the bundled implementation, seeded with Grenoble landmarks.

use crate::domain::Coord;

/// A named place with its coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Human-readable name.
    pub name: String,
    /// Where the place is.
    pub coord: Coord,
}

impl Place {
    /// Create a new place.
    pub fn new(name: impl Into<String>, coord: Coord) -> Self {
        Self {
            name: name.into(),
            coord,
        }
    }
}

/// Resolves free-text queries to candidate places, best match first.
pub trait PlaceSearch: Send + Sync {
    /// Find places matching the query, ordered best-first.
    fn find(&self, query: &str) -> Vec<Place>;
}

/// In-memory place lookup.
///
/// Matching is case-insensitive substring search over the registered
/// names; candidates keep registration order.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: Vec<Place>,
}

impl Gazetteer {
    /// Create an empty gazetteer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a place.
    pub fn add(&mut self, name: impl Into<String>, coord: Coord) {
        self.entries.push(Place::new(name, coord));
    }

    /// Number of registered places.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no places are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PlaceSearch for Gazetteer {
    fn find(&self, query: &str) -> Vec<Place> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|place| place.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

/// The default gazetteer: landmarks around the Grenoble metro area.
pub fn grenoble_landmarks() -> Gazetteer {
    let mut places = Gazetteer::new();

    let mut add = |name: &str, lat: f64, lon: f64| {
        // Coordinates are hand-checked literals; construction cannot fail.
        if let Ok(coord) = Coord::new(lat, lon) {
            places.add(name, coord);
        }
    };

    add("Gare de Grenoble", 45.1914, 5.7144);
    add("Ensimag", 45.1935, 5.7684);
    add("Maison de la Montagne", 45.1876, 5.7312);
    add("Musée de Grenoble", 45.1946, 5.7321);
    add("Bastille", 45.1989, 5.7253);
    add("Campus Saint-Martin-d'Hères", 45.1918, 5.7672);
    add("Stade des Alpes", 45.1873, 5.7400);
    add("Grand'Place", 45.1585, 5.7324);
    add("Hôpital Michallon", 45.1988, 5.7441);
    add("Victor Hugo", 45.1884, 5.7239);

    places
}
