//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod auth;
mod booking_form;
mod catalog;
mod session;
mod trips;

pub use auth::AuthService;
pub use booking_form::{BookingForm, BookingFormService, CancelOutcome, FormError, SubmitOutcome};
pub use catalog::{CatalogPage, CatalogService};
pub use session::{Session, SessionService};
pub use trips::{Trip, TripService, TripsPage};
