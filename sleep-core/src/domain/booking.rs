//! Booking domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking
///
/// Cancellation is a status transition, never a delete; the server keeps
/// the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Cancelled,
}

/// A reservation of a listing by a user for a date range
///
/// The external API is the sole source of truth; the client only ever holds
/// a transient in-memory copy. Dates stay in their `YYYY-MM-DD` wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub user_id: u64,
    pub listing_id: u64,
    pub start_date: String,
    pub end_date: String,
    pub guests: u32,
    pub total_price: Decimal,
    pub status: BookingStatus,
    /// Unix millis at creation (the mock server stores `Date.now()`)
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Booking {
    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }

    /// A status-only copy used for cancellation PUTs
    pub fn cancelled(&self) -> Self {
        Self {
            status: BookingStatus::Cancelled,
            ..self.clone()
        }
    }
}

/// Payload for creating a booking via `POST /bookings` (server assigns the id)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: u64,
    pub listing_id: u64,
    pub start_date: String,
    pub end_date: String,
    pub guests: u32,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> Booking {
        Booking {
            id: 10,
            user_id: 1,
            listing_id: 2,
            start_date: "2026-02-01".to_string(),
            end_date: "2026-02-04".to_string(),
            guests: 2,
            total_price: Decimal::new(237, 0),
            status: BookingStatus::Active,
            created_at: 1_760_000_000_000,
            updated_at: None,
        }
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        let status: BookingStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, BookingStatus::Active);
    }

    #[test]
    fn test_cancelled_copy_only_changes_status() {
        let b = booking();
        let c = b.cancelled();
        assert_eq!(c.status, BookingStatus::Cancelled);
        assert!(!c.is_active());
        assert_eq!(c.id, b.id);
        assert_eq!(c.total_price, b.total_price);
    }
}
