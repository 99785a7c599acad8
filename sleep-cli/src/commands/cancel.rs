//! Cancel command - cancel a booking

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::{get_context, require_user, spinner};
use crate::output;

pub async fn run(booking_id: u64, yes: bool) -> Result<()> {
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

    // Confirm unless --yes
    if !yes {
        println!(
            "\n{}",
            format!(
                "This will cancel your booking at '{}' ({} to {}).",
                trip.title(),
                trip.booking.start_date,
                trip.booking.end_date
            )
            .yellow()
        );

        if !Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?
        {
            println!("{}\n", "Kept".dimmed());
            return Ok(());
        }
    }

    let pb = spinner("Cancelling...");
    let cancelled = ctx.trip_service.cancel(&trip.booking).await;
    pb.finish_and_clear();
    let cancelled = cancelled?;

    output::success(&format!("Booking #{} cancelled", cancelled.id));
    Ok(())
}
