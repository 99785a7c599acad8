//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest HTTP client for the BookingApi port
//! - Local filesystem for the SessionStore port
//! - Canned demo fixtures for offline degradation

pub mod demo;
pub mod file_store;
pub mod http;
