//! Sleep CLI - browse listings and manage bookings from your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{book, cancel, edit, listings, login, logout, profile, register, trips};

/// Sleep - booking demo in your terminal
#[derive(Parser)]
#[command(name = "sleep", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign in with email and password
    Login {
        /// Email address
        email: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Show or update the signed-in profile
    Profile {
        /// Set a new display name
        #[arg(long)]
        name: Option<String>,
        /// Set an avatar image URI (empty string clears it)
        #[arg(long)]
        avatar: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse listings
    Listings {
        /// Only the featured subset
        #[arg(long)]
        featured: bool,
        /// Filter by title or city (case-insensitive)
        #[arg(long)]
        search: Option<String>,
        /// Filter by proximity to "lat,lng"
        #[arg(long)]
        near: Option<String>,
        /// Radius in km for --near
        #[arg(long, default_value_t = 50.0)]
        radius: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Book a listing
    Book {
        /// Listing id
        listing_id: u64,
        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Check-out date (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        /// Number of guests
        #[arg(long, default_value = "1")]
        guests: String,
    },

    /// List your bookings
    Trips {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a booking's dates or guest count
    Edit {
        /// Booking id
        booking_id: u64,
        /// New check-in date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// New check-out date (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        /// New number of guests
        #[arg(long)]
        guests: Option<String>,
    },

    /// Cancel a booking
    Cancel {
        /// Booking id
        booking_id: u64,
        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("SLEEP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Register { name, email, password } => register::run(name, email, password).await,
        Commands::Login { email, password } => login::run(&email, password).await,
        Commands::Logout => logout::run(),
        Commands::Profile { name, avatar, json } => profile::run(name, avatar, json),
        Commands::Listings { featured, search, near, radius, json } => {
            listings::run(featured, search, near, radius, json).await
        }
        Commands::Book { listing_id, from, to, guests } => {
            book::run(listing_id, &from, &to, &guests).await
        }
        Commands::Trips { json } => trips::run(json).await,
        Commands::Edit { booking_id, from, to, guests } => {
            edit::run(booking_id, &from, &to, guests).await
        }
        Commands::Cancel { booking_id, yes } => cancel::run(booking_id, yes).await,
    }
}
