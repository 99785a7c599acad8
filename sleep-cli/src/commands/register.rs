//! Register command - create an account and sign in

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};

use super::get_context;

pub async fn run(name: Option<String>, email: Option<String>, password: Option<String>) -> Result<()> {
    let ctx = get_context()?;

    let name: String = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Display name").interact_text()?,
    };
    let email: String = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let (password, confirm) = match password {
        Some(p) => (p.clone(), p),
        None => {
            let p: String = Password::new().with_prompt("Password").interact()?;
            let c: String = Password::new().with_prompt("Confirm password").interact()?;
            (p, c)
        }
    };

    let user = ctx.auth_service.register(&name, &email, &password, &confirm).await?;

    println!("{} Welcome, {}!", "Success!".green(), user.display_name);
    println!("You are signed in. Run 'sleep listings' to start browsing.");
    Ok(())
}
