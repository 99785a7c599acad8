//! Trips command - list your bookings

use anyhow::Result;
use colored::Colorize;

use super::{get_context, require_user, spinner};
use crate::output;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = require_user(&ctx)?;

    let pb = spinner("Fetching trips...");
    let page = ctx.trip_service.load(Some(&user)).await;
    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&page.trips)?);
        return Ok(());
    }

    if page.is_empty() {
        println!("{}", "No trips yet. Run 'sleep listings' to find a place.".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Listing", "Dates", "Guests", "Total", "Status", "Booked"]);
    for trip in &page.trips {
        let status = if trip.booking.is_active() {
            "active".green().to_string()
        } else {
            "cancelled".yellow().to_string()
        };
        table.add_row(vec![
            trip.booking.id.to_string(),
            trip.title(),
            format!("{} to {}", trip.booking.start_date, trip.booking.end_date),
            trip.booking.guests.to_string(),
            output::format_price(trip.booking.total_price),
            status,
            output::format_millis(trip.booking.created_at),
        ]);
    }
    println!("{table}");
    Ok(())
}
