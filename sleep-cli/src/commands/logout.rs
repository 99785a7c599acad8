//! Logout command - sign out and forget the saved session

use anyhow::Result;
use colored::Colorize;

use super::get_context;

pub fn run() -> Result<()> {
    let ctx = get_context()?;

    if ctx.session.current_user().is_none() {
        println!("{}", "Not signed in".dimmed());
        return Ok(());
    }

    ctx.auth_service.logout();
    println!("{}", "Signed out".green());
    Ok(())
}
