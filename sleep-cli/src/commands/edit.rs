//! Edit command - change a booking's dates or guest count

use anyhow::Result;

use sleep_core::{BookingForm, SubmitOutcome};

use super::{get_context, require_user, spinner};
use crate::output;

pub async fn run(booking_id: u64, from: &str, to: &str, guests: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let user = require_user(&ctx)?;

    let pb = spinner("Fetching booking...");
    let page = ctx.trip_service.load(Some(&user)).await;
    pb.finish_and_clear();

    let trip = page
        .trips
        .into_iter()
        .find(|t| t.booking.id == booking_id)
        .ok_or_else(|| anyhow::anyhow!("Booking #{} not found", booking_id))?;

    let form = BookingForm {
        start_date: from.to_string(),
        end_date: to.to_string(),
        guests: guests.unwrap_or_else(|| trip.booking.guests.to_string()),
    };

    let pb = spinner("Saving...");
    let outcome = ctx
        .booking_service
        .edit(&trip.booking, trip.listing.as_ref(), &form)
        .await;
    pb.finish_and_clear();

    match outcome? {
        SubmitOutcome::Saved(booking) | SubmitOutcome::Booked(booking) => {
            output::success(&format!(
                "Booking #{} updated: {} to {}, {} guest(s), total {}",
                booking.id,
                booking.start_date,
                booking.end_date,
                booking.guests,
                output::format_price(booking.total_price),
            ));
        }
        SubmitOutcome::SimulatedOffline(_) => {
            output::warning("Backend unreachable; change simulated. It is not saved on the server.");
        }
        SubmitOutcome::LoginRequired => {
            anyhow::bail!("Not signed in. Run 'sleep login <email>' first.");
        }
    }
    Ok(())
}
