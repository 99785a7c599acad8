//! Listing domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable property record
///
/// Read-only from the client's perspective: fetched, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u64,
    pub title: String,
    pub city: String,
    pub price_per_night: Decimal,
    pub rating: f64,
    pub rooms: u32,
    /// Geocoordinates are optional; the map view skips listings without them
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Listing {
    /// Whether this listing can be placed on the map
    pub fn has_coordinates(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }

    /// Case-insensitive match against title or city
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&q) || self.city.to_lowercase().contains(&q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn listing() -> Listing {
        Listing {
            id: 1,
            title: "Cozy Studio near Center".to_string(),
            city: "Barcelona".to_string(),
            price_per_night: Decimal::new(79, 0),
            rating: 4.7,
            rooms: 1,
            lat: None,
            lng: None,
        }
    }

    #[test]
    fn test_matches_query_title_and_city() {
        let l = listing();
        assert!(l.matches_query("cozy"));
        assert!(l.matches_query("BARCELONA"));
        assert!(!l.matches_query("valencia"));
        assert!(l.matches_query("  "));
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"id":2,"title":"Beach Apartment","city":"Valencia","pricePerNight":120,"rating":4.9,"rooms":2}"#;
        let l: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(l.price_per_night, Decimal::new(120, 0));
        assert!(!l.has_coordinates());
    }
}
