//! Canned demo data for offline degradation
//!
//! When the REST backend is unreachable and `degrade_to_demo` is enabled,
//! read paths substitute these fixtures and write paths fabricate a
//! simulated success, so the demo stays navigable without a server.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::{Booking, Listing, NewBooking};

/// Fixture listings shown when `GET /listings` fails
pub fn demo_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "Cozy Studio near Center".to_string(),
            city: "Barcelona".to_string(),
            price_per_night: Decimal::new(79, 0),
            rating: 4.7,
            rooms: 1,
            lat: Some(41.3874),
            lng: Some(2.1686),
        },
        Listing {
            id: 2,
            title: "Beach Apartment with View".to_string(),
            city: "Valencia".to_string(),
            price_per_night: Decimal::new(120, 0),
            rating: 4.9,
            rooms: 2,
            lat: Some(39.4699),
            lng: Some(-0.3763),
        },
        Listing {
            id: 3,
            title: "Modern Loft".to_string(),
            city: "Madrid".to_string(),
            price_per_night: Decimal::new(95, 0),
            rating: 4.6,
            rooms: 1,
            lat: Some(40.4168),
            lng: Some(-3.7038),
        },
        Listing {
            id: 4,
            title: "Mountain Cabin".to_string(),
            city: "Andorra".to_string(),
            price_per_night: Decimal::new(110, 0),
            rating: 4.8,
            rooms: 3,
            lat: Some(42.5063),
            lng: Some(1.5218),
        },
    ]
}

/// Fixture subset shown when `GET /listings?featured=true` fails
pub fn demo_featured() -> Vec<Listing> {
    demo_listings().into_iter().take(2).collect()
}

/// Fabricate a booking from a payload as if the POST had succeeded
///
/// The id is minted from the clock; it only needs to be unique within the
/// current run, since nothing is persisted locally.
pub fn simulated_booking(payload: &NewBooking) -> Booking {
    Booking {
        id: Utc::now().timestamp_millis() as u64,
        user_id: payload.user_id,
        listing_id: payload.listing_id,
        start_date: payload.start_date.clone(),
        end_date: payload.end_date.clone(),
        guests: payload.guests,
        total_price: payload.total_price,
        status: payload.status,
        created_at: payload.created_at,
        updated_at: None,
    }
}
