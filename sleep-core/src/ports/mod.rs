//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod api;
mod session_store;

pub use api::BookingApi;
pub use session_store::{SavedProfile, SessionStore};
