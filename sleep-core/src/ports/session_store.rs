//! Local session persistence port
//!
//! Two slots: a secure slot holding the opaque session token, and a general
//! slot holding the serialized profile record.

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;
use crate::domain::User;

/// The profile record persisted in the general slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedProfile {
    pub user: Option<User>,
}

/// Local persistence collaborator for the session service
pub trait SessionStore: Send + Sync {
    /// Load the saved profile; `Ok(None)` when nothing was saved yet
    fn load_profile(&self) -> Result<Option<SavedProfile>>;

    /// Persist the profile record
    fn save_profile(&self, profile: &SavedProfile) -> Result<()>;

    /// Load the session token from the secure slot
    fn load_token(&self) -> Result<Option<String>>;

    /// Persist the session token to the secure slot
    fn save_token(&self, token: &str) -> Result<()>;

    /// Delete the persisted token (logout)
    fn delete_token(&self) -> Result<()>;
}
