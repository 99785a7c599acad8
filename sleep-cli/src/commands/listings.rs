//! Listings command - browse the catalog

use anyhow::Result;
use colored::Colorize;

use super::{get_context, spinner};
use crate::output;

pub async fn run(
    featured: bool,
    search: Option<String>,
    near: Option<String>,
    radius: f64,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;

    let pb = spinner("Fetching listings...");
    let page = if let Some(near) = &near {
        let (lat, lng) = parse_coords(near)?;
        ctx.catalog_service.near(lat, lng, radius).await
    } else if let Some(query) = &search {
        ctx.catalog_service.search(query).await
    } else if featured {
        ctx.catalog_service.featured().await
    } else {
        ctx.catalog_service.explore().await
    };
    pb.finish_and_clear();
    let page = page?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page.listings)?);
        return Ok(());
    }

    if page.demo_fallback {
        output::warning("Backend unreachable, showing demo data");
    }

    if page.listings.is_empty() {
        println!("{}", "No listings match".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Title", "City", "Per night", "Rating", "Rooms", "Map"]);
    for listing in &page.listings {
        table.add_row(vec![
            listing.id.to_string(),
            listing.title.clone(),
            listing.city.clone(),
            output::format_price(listing.price_per_night),
            format!("{:.1}", listing.rating),
            listing.rooms.to_string(),
            if listing.has_coordinates() { "yes".to_string() } else { "-".to_string() },
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Parse a "lat,lng" pair
fn parse_coords(input: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        anyhow::bail!("Expected coordinates as 'lat,lng', got '{}'", input);
    }
    let lat: f64 = parts[0]
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid latitude: '{}'", parts[0]))?;
    let lng: f64 = parts[1]
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid longitude: '{}'", parts[1]))?;
    Ok((lat, lng))
}
