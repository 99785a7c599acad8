//! Trips service - a user's bookings joined with their listings
//!
//! Bookings and listings are fetched concurrently and joined client-side.
//! Cancellation from the trip list is strict: the server must confirm before
//! the caller may update anything it shows.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::domain::result::{Error, Result};
use crate::domain::{Booking, Listing, User};
use crate::ports::BookingApi;

/// A booking with its listing resolved, when the catalog still has it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub booking: Booking,
    pub listing: Option<Listing>,
}

impl Trip {
    /// Display title; falls back to the listing id when the join missed
    pub fn title(&self) -> String {
        match &self.listing {
            Some(listing) => listing.title.clone(),
            None => format!("Listing #{}", self.booking.listing_id),
        }
    }

    pub fn can_cancel(&self) -> bool {
        self.booking.is_active()
    }
}

/// The trips view: all of a user's bookings, newest first
#[derive(Debug, Clone, Default)]
pub struct TripsPage {
    pub trips: Vec<Trip>,
}

impl TripsPage {
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

pub struct TripService {
    api: Arc<dyn BookingApi>,
}

impl TripService {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api }
    }

    /// Load the trips page for a user
    ///
    /// No user means an empty page. Fetch failures also yield an empty page,
    /// with a warning; the trip list renders its empty state rather than an
    /// error.
    pub async fn load(&self, user: Option<&User>) -> TripsPage {
        let user = match user {
            Some(user) => user,
            None => return TripsPage::default(),
        };

        let (bookings, listings) = tokio::join!(
            self.api.list_user_bookings(user.id),
            self.api.list_listings(),
        );

        let bookings = match bookings {
            Ok(bookings) => bookings,
            Err(e) => {
                warn!("Bookings fetch failed: {e}");
                return TripsPage::default();
            }
        };
        let listings = match listings {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Listings fetch failed, trips will be unresolved: {e}");
                Vec::new()
            }
        };

        let mut trips: Vec<Trip> = bookings
            .into_iter()
            .map(|booking| {
                let listing = listings.iter().find(|l| l.id == booking.listing_id).cloned();
                Trip { booking, listing }
            })
            .collect();
        trips.sort_by(|a, b| b.booking.created_at.cmp(&a.booking.created_at));

        TripsPage { trips }
    }

    /// Cancel a booking from the trip list
    ///
    /// Strict: the error propagates on failure, and the caller must only
    /// update its view from the returned booking.
    pub async fn cancel(&self, booking: &Booking) -> Result<Booking> {
        if !booking.is_active() {
            return Err(Error::validation("Booking is already cancelled."));
        }
        let cancelled = booking.cancelled();
        self.api.update_booking(cancelled.id, &cancelled).await
    }
}
