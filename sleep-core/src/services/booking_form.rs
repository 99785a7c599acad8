//! Booking form service - create, edit, and cancel flows
//!
//! The form holds raw text input, validation runs in a fixed order and
//! reports the first problem only, and write failures degrade to a simulated
//! success when the policy allows it.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error as ThisError;
use tracing::warn;

use crate::adapters::demo;
use crate::domain::dates;
use crate::domain::result::{Error, Result};
use crate::domain::{Booking, BookingStatus, Listing, NewBooking};
use crate::ports::BookingApi;
use crate::services::SessionService;

/// Raw form input, as typed
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub start_date: String,
    pub end_date: String,
    pub guests: String,
}

/// First validation failure, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum FormError {
    #[error("No listing selected.")]
    NoListing,
    #[error("Dates are required.")]
    DatesRequired,
    #[error("Use format YYYY-MM-DD.")]
    BadDateFormat,
    #[error("End date must be after start date.")]
    EndNotAfterStart,
    #[error("Guests must be at least 1.")]
    GuestsTooFew,
}

impl From<FormError> for Error {
    fn from(e: FormError) -> Self {
        Error::validation(e.to_string())
    }
}

/// How a submit concluded
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Created on the server
    Booked(Booking),
    /// Edited on the server
    Saved(Booking),
    /// Backend unreachable; success fabricated locally
    SimulatedOffline(Booking),
    /// No session; nothing was sent
    LoginRequired,
}

/// How a cancellation attempt concluded
#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    /// Caller must confirm before anything is sent
    ConfirmationRequired,
    /// Cancelled on the server
    Cancelled(Booking),
    /// Backend unreachable; cancellation fabricated locally
    SimulatedOffline(Booking),
}

pub struct BookingFormService {
    api: Arc<dyn BookingApi>,
    session: Arc<SessionService>,
    degrade_to_demo: bool,
    recompute_price_on_edit: bool,
}

impl BookingFormService {
    pub fn new(
        api: Arc<dyn BookingApi>,
        session: Arc<SessionService>,
        degrade_to_demo: bool,
        recompute_price_on_edit: bool,
    ) -> Self {
        Self {
            api,
            session,
            degrade_to_demo,
            recompute_price_on_edit,
        }
    }

    /// Book a listing for the current user
    pub async fn create(&self, listing: Option<&Listing>, form: &BookingForm) -> Result<SubmitOutcome> {
        let listing = listing.ok_or(FormError::NoListing)?;
        let (nights, guests) = validate_dates_and_guests(form)?;

        let user = match self.session.current_user() {
            Some(user) => user,
            None => return Ok(SubmitOutcome::LoginRequired),
        };

        let payload = NewBooking {
            user_id: user.id,
            listing_id: listing.id,
            start_date: form.start_date.trim().to_string(),
            end_date: form.end_date.trim().to_string(),
            guests,
            total_price: dates::total_price(nights, listing.price_per_night),
            status: BookingStatus::Active,
            created_at: Utc::now().timestamp_millis(),
        };

        match self.api.create_booking(&payload).await {
            Ok(booking) => Ok(SubmitOutcome::Booked(booking)),
            Err(e) if self.degrade_to_demo => {
                warn!("Booking create failed, simulating success: {e}");
                Ok(SubmitOutcome::SimulatedOffline(demo::simulated_booking(&payload)))
            }
            Err(e) => Err(e),
        }
    }

    /// Edit an existing booking's dates and guest count
    ///
    /// The stored total is kept as-is unless recomputation is enabled and the
    /// listing's nightly price is known.
    pub async fn edit(
        &self,
        booking: &Booking,
        listing: Option<&Listing>,
        form: &BookingForm,
    ) -> Result<SubmitOutcome> {
        let (nights, guests) = validate_dates_and_guests(form)?;

        if self.session.current_user().is_none() {
            return Ok(SubmitOutcome::LoginRequired);
        }

        let total_price = match (self.recompute_price_on_edit, listing) {
            (true, Some(listing)) if nights > 0 => dates::total_price(nights, listing.price_per_night),
            _ => booking.total_price,
        };

        let updated = Booking {
            start_date: form.start_date.trim().to_string(),
            end_date: form.end_date.trim().to_string(),
            guests,
            total_price,
            updated_at: Some(Utc::now().timestamp_millis()),
            ..booking.clone()
        };

        match self.api.update_booking(updated.id, &updated).await {
            Ok(booking) => Ok(SubmitOutcome::Saved(booking)),
            Err(e) if self.degrade_to_demo => {
                warn!("Booking update failed, simulating success: {e}");
                Ok(SubmitOutcome::SimulatedOffline(updated))
            }
            Err(e) => Err(e),
        }
    }

    /// Cancel a booking, gated on an explicit confirmation
    ///
    /// Nothing is sent until `confirmed` is true.
    pub async fn cancel(&self, booking: &Booking, confirmed: bool) -> Result<CancelOutcome> {
        if !booking.is_active() {
            return Err(Error::validation("Booking is already cancelled."));
        }
        if !confirmed {
            return Ok(CancelOutcome::ConfirmationRequired);
        }

        let cancelled = booking.cancelled();
        match self.api.update_booking(cancelled.id, &cancelled).await {
            Ok(booking) => Ok(CancelOutcome::Cancelled(booking)),
            Err(e) if self.degrade_to_demo => {
                warn!("Booking cancel failed, simulating success: {e}");
                Ok(CancelOutcome::SimulatedOffline(cancelled))
            }
            Err(e) => Err(e),
        }
    }

    /// Price quote for the current form against a listing, for display
    pub fn quote(&self, listing: &Listing, form: &BookingForm) -> Option<(i64, Decimal)> {
        let nights = dates::nights_between(form.start_date.trim(), form.end_date.trim());
        if nights <= 0 {
            return None;
        }
        Some((nights, dates::total_price(nights, listing.price_per_night)))
    }
}

/// Validate in a fixed order, reporting the first failure only
fn validate_dates_and_guests(form: &BookingForm) -> std::result::Result<(i64, u32), FormError> {
    let start = form.start_date.trim();
    let end = form.end_date.trim();

    if start.is_empty() || end.is_empty() {
        return Err(FormError::DatesRequired);
    }

    let start_date = dates::parse_date(start).ok_or(FormError::BadDateFormat)?;
    let end_date = dates::parse_date(end).ok_or(FormError::BadDateFormat)?;

    let nights = (end_date - start_date).num_days();
    if nights <= 0 {
        return Err(FormError::EndNotAfterStart);
    }

    // Fractional input is floored, anything unparseable becomes zero
    let guests = form
        .guests
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|g| g.is_finite())
        .map(|g| g.floor().max(0.0) as u32)
        .unwrap_or(0);
    if guests < 1 {
        return Err(FormError::GuestsTooFew);
    }

    Ok((nights, guests))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(start: &str, end: &str, guests: &str) -> BookingForm {
        BookingForm {
            start_date: start.to_string(),
            end_date: end.to_string(),
            guests: guests.to_string(),
        }
    }

    #[test]
    fn test_valid_form_yields_nights_and_guests() {
        let (nights, guests) =
            validate_dates_and_guests(&form("2026-02-01", "2026-02-04", "2")).unwrap();
        assert_eq!(nights, 3);
        assert_eq!(guests, 2);
    }

    #[test]
    fn test_missing_dates_reported_before_format() {
        let err = validate_dates_and_guests(&form("", "not-a-date", "2")).unwrap_err();
        assert_eq!(err, FormError::DatesRequired);
    }

    #[test]
    fn test_bad_format_reported_before_ordering() {
        let err = validate_dates_and_guests(&form("2026-13-01", "2026-01-01", "2")).unwrap_err();
        assert_eq!(err, FormError::BadDateFormat);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = validate_dates_and_guests(&form("2026-02-04", "2026-02-01", "2")).unwrap_err();
        assert_eq!(err, FormError::EndNotAfterStart);

        // Zero nights is also not bookable
        let err = validate_dates_and_guests(&form("2026-02-01", "2026-02-01", "2")).unwrap_err();
        assert_eq!(err, FormError::EndNotAfterStart);
    }

    #[test]
    fn test_guest_count_checked_last() {
        let err = validate_dates_and_guests(&form("2026-02-01", "2026-02-04", "0")).unwrap_err();
        assert_eq!(err, FormError::GuestsTooFew);

        let err = validate_dates_and_guests(&form("2026-02-01", "2026-02-04", "two")).unwrap_err();
        assert_eq!(err, FormError::GuestsTooFew);
    }

    #[test]
    fn test_fractional_guests_are_floored() {
        let (_, guests) =
            validate_dates_and_guests(&form("2026-02-01", "2026-02-04", "2.5")).unwrap();
        assert_eq!(guests, 2);

        // Floors below one still fail the minimum
        let err = validate_dates_and_guests(&form("2026-02-01", "2026-02-04", "0.9")).unwrap_err();
        assert_eq!(err, FormError::GuestsTooFew);
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::NoListing.to_string(), "No listing selected.");
        assert_eq!(FormError::DatesRequired.to_string(), "Dates are required.");
        assert_eq!(FormError::BadDateFormat.to_string(), "Use format YYYY-MM-DD.");
        assert_eq!(
            FormError::EndNotAfterStart.to_string(),
            "End date must be after start date."
        );
        assert_eq!(FormError::GuestsTooFew.to_string(), "Guests must be at least 1.");
    }
}
