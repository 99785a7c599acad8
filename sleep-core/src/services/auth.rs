//! Authentication service - login and registration
//!
//! Credentials are checked by querying the mock json-server; the token is a
//! client-minted opaque string, good enough for a demo backend that never
//! verifies it.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::info;

use crate::domain::result::{Error, Result};
use crate::domain::{NewUser, User};
use crate::ports::BookingApi;
use crate::services::SessionService;

pub struct AuthService {
    api: Arc<dyn BookingApi>,
    session: Arc<SessionService>,
}

impl AuthService {
    pub fn new(api: Arc<dyn BookingApi>, session: Arc<SessionService>) -> Self {
        Self { api, session }
    }

    /// Log in with email and password
    ///
    /// The email is trimmed and lowercased before the lookup, matching how
    /// registration stores it. On success the session is established and the
    /// logged-in user returned.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() {
            return Err(Error::validation("Email and password are required."));
        }

        let user = self
            .api
            .find_user(&email, password)
            .await?
            .ok_or_else(|| Error::auth("Invalid email or password"))?;

        info!("User {} logged in", user.id);
        self.session.login(mint_token(), user.clone());
        Ok(user)
    }

    /// Register a new account and log it in
    pub async fn register(
        &self,
        display_name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User> {
        let display_name = display_name.trim();
        let email = email.trim().to_lowercase();

        if display_name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(Error::validation("Complete all fields"));
        }
        if password != confirm_password {
            return Err(Error::validation("Passwords do not match"));
        }

        if self.api.email_exists(&email).await? {
            return Err(Error::validation("Email already registered"));
        }

        let payload = NewUser {
            email,
            display_name: display_name.to_string(),
            password: password.to_string(),
            avatar_uri: None,
        };
        let user = self.api.create_user(&payload).await?;

        info!("User {} registered", user.id);
        self.session.login(mint_token(), user.clone());
        Ok(user)
    }

    /// End the current session
    pub fn logout(&self) {
        self.session.logout();
    }
}

/// Opaque session token: millis timestamp plus a random nonce
fn mint_token() -> String {
    let nonce: u64 = rand::thread_rng().gen();
    format!("token_{}_{:x}", Utc::now().timestamp_millis(), nonce)
}
