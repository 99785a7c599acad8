//! Sleep Core - Business logic for the Sleep booking client
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, Listing, Booking) and pure helpers
//! - **ports**: Trait definitions for external dependencies (BookingApi, SessionStore)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (reqwest HTTP client, file store, demo data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::file_store::FileSessionStore;
use adapters::http::HttpBookingApi;
use config::Config;
use services::{AuthService, BookingFormService, CatalogService, SessionService, TripService};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Booking, BookingStatus, Listing, NewBooking, NewUser, User};
pub use ports::{BookingApi, SavedProfile, SessionStore};
pub use services::{
    BookingForm, CancelOutcome, CatalogPage, FormError, Session, SubmitOutcome, Trip, TripsPage,
};

/// Main context for Sleep operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration, the restored session, and all services wired against the
/// HTTP booking API.
pub struct SleepContext {
    pub config: Config,
    pub session: Arc<SessionService>,
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub booking_service: BookingFormService,
    pub trip_service: TripService,
}

impl SleepContext {
    /// Create a new Sleep context rooted at the app directory
    pub fn new(app_dir: &Path) -> Result<Self> {
        let config = Config::load(app_dir)?;

        let store = Arc::new(FileSessionStore::new(app_dir)?);
        let session = Arc::new(SessionService::new(store));
        session.restore();

        let api: Arc<dyn BookingApi> =
            Arc::new(HttpBookingApi::new(&config.api_base_url, session.shared_token())?);

        let auth_service = AuthService::new(Arc::clone(&api), Arc::clone(&session));
        let catalog_service = CatalogService::new(Arc::clone(&api), config.degrade_to_demo);
        let booking_service = BookingFormService::new(
            Arc::clone(&api),
            Arc::clone(&session),
            config.degrade_to_demo,
            config.recompute_price_on_edit,
        );
        let trip_service = TripService::new(Arc::clone(&api));

        Ok(Self {
            config,
            session,
            auth_service,
            catalog_service,
            booking_service,
            trip_service,
        })
    }
}
