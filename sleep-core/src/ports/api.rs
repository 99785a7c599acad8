//! Booking API port
//!
//! Defines the interface to the REST collaborator (a mock json-server in the
//! demo deployment). Implementations: the reqwest HTTP client and the
//! in-memory mock used by the integration tests.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Booking, Listing, NewBooking, NewUser, User};

/// REST operations consumed by the services
///
/// Every call is a single request; degradation to demo data on failure is a
/// caller policy, not a transport concern.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `GET /listings`
    async fn list_listings(&self) -> Result<Vec<Listing>>;

    /// `GET /listings?featured=true`
    async fn list_featured(&self) -> Result<Vec<Listing>>;

    /// `GET /users?email=&password=` - credentials lookup for login
    ///
    /// An empty result means the credentials do not match any user.
    async fn find_user(&self, email: &str, password: &str) -> Result<Option<User>>;

    /// `GET /users?email=` - registration pre-check
    async fn email_exists(&self, email: &str) -> Result<bool>;

    /// `POST /users` - returns the created user with its server-assigned id
    async fn create_user(&self, payload: &NewUser) -> Result<User>;

    /// `POST /bookings` - returns the created booking with its id
    async fn create_booking(&self, payload: &NewBooking) -> Result<Booking>;

    /// `PUT /bookings/{id}` - full replacement; used for field edits and for
    /// status-only cancellation alike
    async fn update_booking(&self, id: u64, booking: &Booking) -> Result<Booking>;

    /// `GET /bookings?userId={id}`
    async fn list_user_bookings(&self, user_id: u64) -> Result<Vec<Booking>>;
}
