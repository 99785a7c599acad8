//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod booking;
pub mod dates;
pub mod geo;
mod listing;
pub mod result;
mod user;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use listing::Listing;
pub use user::{NewUser, User};
