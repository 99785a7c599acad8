//! Login command - sign in with email and password

use anyhow::Result;
use colored::Colorize;
use dialoguer::Password;

use super::get_context;

pub async fn run(email: &str, password: Option<String>) -> Result<()> {
    let ctx = get_context()?;

    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let user = ctx.auth_service.login(email, &password).await?;

    println!("{} Signed in as {} <{}>", "Success!".green(), user.display_name, user.email);
    Ok(())
}
