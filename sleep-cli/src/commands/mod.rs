//! CLI command implementations

pub mod book;
pub mod cancel;
pub mod edit;
pub mod listings;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod trips;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use sleep_core::{SleepContext, User};

/// Get the sleep directory from environment or default
pub fn get_sleep_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SLEEP_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".sleep")
    }
}

/// Get or create the sleep context
pub fn get_context() -> Result<SleepContext> {
    let sleep_dir = get_sleep_dir();

    std::fs::create_dir_all(&sleep_dir)
        .with_context(|| format!("Failed to create sleep directory: {:?}", sleep_dir))?;

    SleepContext::new(&sleep_dir).context("Failed to initialize sleep context")
}

/// The signed-in user, or a hint to log in
pub fn require_user(ctx: &SleepContext) -> Result<User> {
    ctx.session
        .current_user()
        .context("Not signed in. Run 'sleep login <email>' first.")
}

/// Spinner shown while a request is in flight
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()));
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
