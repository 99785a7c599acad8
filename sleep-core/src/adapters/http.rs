//! Booking API HTTP client
//!
//! Handles communication with the REST backend (a mock json-server in the
//! demo deployment). The base URL comes from configuration; requests carry a
//! bearer token header when a session token is present, an empty header
//! otherwise, matching the backend's expectations.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::{Booking, Listing, NewBooking, NewUser, User};
use crate::ports::BookingApi;

/// Shared view of the session token
///
/// The session service owns writes; the HTTP adapter only reads a snapshot
/// per request.
pub type SharedToken = Arc<RwLock<Option<String>>>;

/// Booking API client backed by reqwest
#[derive(Debug)]
pub struct HttpBookingApi {
    client: Client,
    base_url: String,
    token: SharedToken,
}

impl HttpBookingApi {
    /// Create a new client for the given base URL
    pub fn new(base_url: &str, token: SharedToken) -> Result<Self> {
        let parsed =
            Url::parse(base_url).map_err(|e| Error::Config(format!("Invalid API base URL: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::Config(format!(
                "API base URL must be http(s), got {}",
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer header value; empty when no session token is held
    fn auth_value(&self) -> String {
        self.token
            .read()
            .ok()
            .and_then(|t| t.as_ref().map(|t| format!("Bearer {t}")))
            .unwrap_or_default()
    }

    /// Map transport errors to user-facing messages
    fn map_request_error(error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::api("Connection timed out after 30 seconds")
        } else if error.is_connect() {
            Error::api("Unable to connect to the booking API")
        } else {
            Error::api(format!("Request failed: {error}"))
        }
    }

    fn check_status(response: &Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::api(format!("HTTP {}", status.as_u16())))
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .header(AUTHORIZATION, self.auth_value())
            .send()
            .await
            .map_err(Self::map_request_error)?;

        Self::check_status(&response)?;
        let parsed = response
            .json()
            .await
            .map_err(|e| Error::api(format!("Failed to parse response: {e}")))?;
        Ok(parsed)
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn list_listings(&self) -> Result<Vec<Listing>> {
        self.get_json("/listings", &[]).await
    }

    async fn list_featured(&self) -> Result<Vec<Listing>> {
        self.get_json("/listings", &[("featured", "true")]).await
    }

    async fn find_user(&self, email: &str, password: &str) -> Result<Option<User>> {
        let users: Vec<User> = self
            .get_json("/users", &[("email", email), ("password", password)])
            .await?;
        Ok(users.into_iter().next())
    }

    async fn email_exists(&self, email: &str) -> Result<bool> {
        let users: Vec<User> = self.get_json("/users", &[("email", email)]).await?;
        Ok(!users.is_empty())
    }

    async fn create_user(&self, payload: &NewUser) -> Result<User> {
        let response = self
            .client
            .post(self.url("/users"))
            .header(AUTHORIZATION, self.auth_value())
            .json(payload)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        Self::check_status(&response)?;
        let created = response
            .json()
            .await
            .map_err(|e| Error::api(format!("Failed to parse created user: {e}")))?;
        Ok(created)
    }

    async fn create_booking(&self, payload: &NewBooking) -> Result<Booking> {
        let response = self
            .client
            .post(self.url("/bookings"))
            .header(AUTHORIZATION, self.auth_value())
            .json(payload)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        Self::check_status(&response)?;
        let created = response
            .json()
            .await
            .map_err(|e| Error::api(format!("Failed to parse created booking: {e}")))?;
        Ok(created)
    }

    async fn update_booking(&self, id: u64, booking: &Booking) -> Result<Booking> {
        let response = self
            .client
            .put(self.url(&format!("/bookings/{id}")))
            .header(AUTHORIZATION, self.auth_value())
            .json(booking)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        Self::check_status(&response)?;
        let updated = response
            .json()
            .await
            .map_err(|e| Error::api(format!("Failed to parse updated booking: {e}")))?;
        Ok(updated)
    }

    async fn list_user_bookings(&self, user_id: u64) -> Result<Vec<Booking>> {
        self.get_json("/bookings", &[("userId", &user_id.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_token() -> SharedToken {
        Arc::new(RwLock::new(None))
    }

    #[test]
    fn test_accepts_http_base_url() {
        let api = HttpBookingApi::new("http://localhost:4000", empty_token());
        assert!(api.is_ok());
    }

    #[test]
    fn test_trims_trailing_slash() {
        let api = HttpBookingApi::new("http://localhost:4000/", empty_token()).unwrap();
        assert_eq!(api.url("/listings"), "http://localhost:4000/listings");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = HttpBookingApi::new("ftp://localhost:4000", empty_token());
        assert!(result.is_err());
    }

    #[test]
    fn test_auth_header_empty_without_token() {
        let api = HttpBookingApi::new("http://localhost:4000", empty_token()).unwrap();
        assert_eq!(api.auth_value(), "");
    }

    #[test]
    fn test_auth_header_carries_bearer_token() {
        let token = Arc::new(RwLock::new(Some("token_123".to_string())));
        let api = HttpBookingApi::new("http://localhost:4000", token).unwrap();
        assert_eq!(api.auth_value(), "Bearer token_123");
    }
}
