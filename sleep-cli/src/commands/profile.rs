//! Profile command - show or update the signed-in profile

use anyhow::Result;
use colored::Colorize;

use super::{get_context, require_user};

pub fn run(name: Option<String>, avatar: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    require_user(&ctx)?;

    if let Some(name) = name {
        ctx.session.set_display_name(&name);
    }
    if let Some(avatar) = avatar {
        // Empty string clears the avatar
        let uri = if avatar.is_empty() { None } else { Some(avatar.as_str()) };
        ctx.session.set_avatar_uri(uri);
    }

    let user = require_user(&ctx)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    println!("{}", user.display_name.bold());
    println!("  email:  {}", user.email);
    match &user.avatar_uri {
        Some(uri) => println!("  avatar: {}", uri),
        None => println!("  avatar: {}", "none".dimmed()),
    }
    Ok(())
}
