//! Book command - reserve a listing for a date range

use anyhow::Result;

use sleep_core::{BookingForm, SubmitOutcome};

use super::{get_context, spinner};
use crate::output;

pub async fn run(listing_id: u64, from: &str, to: &str, guests: &str) -> Result<()> {
    let ctx = get_context()?;

    let pb = spinner("Fetching listing...");
    let listing = ctx.catalog_service.find(listing_id).await;
    pb.finish_and_clear();
    let listing = listing?;

    let form = BookingForm {
        start_date: from.to_string(),
        end_date: to.to_string(),
        guests: guests.to_string(),
    };

    if let Some(listing) = &listing {
        if let Some((nights, total)) = ctx.booking_service.quote(listing, &form) {
            println!(
                "{}: {} nights at {}/night, total {}",
                listing.title,
                nights,
                output::format_price(listing.price_per_night),
                output::format_price(total),
            );
        }
    }

    let pb = spinner("Booking...");
    let outcome = ctx.booking_service.create(listing.as_ref(), &form).await;
    pb.finish_and_clear();

    match outcome? {
        SubmitOutcome::Booked(booking) | SubmitOutcome::Saved(booking) => {
            output::success(&format!(
                "Booked! #{} from {} to {} for {} guest(s), total {}",
                booking.id,
                booking.start_date,
                booking.end_date,
                booking.guests,
                output::format_price(booking.total_price),
            ));
        }
        SubmitOutcome::SimulatedOffline(booking) => {
            output::warning(&format!(
                "Backend unreachable; booking simulated (total {}). It is not saved on the server.",
                output::format_price(booking.total_price),
            ));
        }
        SubmitOutcome::LoginRequired => {
            anyhow::bail!("Not signed in. Run 'sleep login <email>' first.");
        }
    }
    Ok(())
}
