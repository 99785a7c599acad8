//! Session service - current user and token
//!
//! The session is the only shared mutable state in the system. This service
//! owns it exclusively: readers get a whole-object snapshot, mutations are
//! whole-object replacements through the entry points below, and every user
//! change triggers a profile write. Store failures are logged and treated as
//! "no session"; nothing here is fatal.

use std::sync::{Arc, Mutex, RwLock};

use tracing::warn;

use crate::adapters::http::SharedToken;
use crate::domain::User;
use crate::ports::{SavedProfile, SessionStore};

/// Immutable snapshot of the current session
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Owner of the session state
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    state: Mutex<Session>,
    /// Read-side handle shared with the HTTP adapter
    token: SharedToken,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            state: Mutex::new(Session::default()),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Token handle for wiring into the HTTP adapter
    pub fn shared_token(&self) -> SharedToken {
        Arc::clone(&self.token)
    }

    /// Snapshot of the current session
    pub fn snapshot(&self) -> Session {
        self.state.lock().unwrap().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.snapshot().user
    }

    /// Restore a previously saved session on process start
    ///
    /// Missing or unreadable state simply means no session.
    pub fn restore(&self) {
        let user = match self.store.load_profile() {
            Ok(profile) => profile.and_then(|p| p.user),
            Err(e) => {
                warn!("Failed to load saved profile: {e}");
                None
            }
        };

        let token = match self.store.load_token() {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to load saved token: {e}");
                None
            }
        };

        self.replace(Session { user, token });
    }

    /// Establish a session: persist the token, replace in-memory state
    pub fn login(&self, token: String, user: User) {
        if let Err(e) = self.store.save_token(&token) {
            warn!("Failed to persist session token: {e}");
        }
        self.replace(Session {
            user: Some(user),
            token: Some(token),
        });
        self.persist_profile();
    }

    /// End the session: delete the persisted token, clear state
    pub fn logout(&self) {
        if let Err(e) = self.store.delete_token() {
            warn!("Failed to delete session token: {e}");
        }
        self.replace(Session::default());
        self.persist_profile();
    }

    /// Update the display name; no-op when no user is present
    pub fn set_display_name(&self, name: &str) {
        let changed = {
            let mut state = self.state.lock().unwrap();
            match state.user.as_mut() {
                Some(user) => {
                    user.display_name = name.to_string();
                    true
                }
                None => false,
            }
        };
        if changed {
            self.persist_profile();
        }
    }

    /// Update the avatar reference; no-op when no user is present
    pub fn set_avatar_uri(&self, uri: Option<&str>) {
        let changed = {
            let mut state = self.state.lock().unwrap();
            match state.user.as_mut() {
                Some(user) => {
                    user.avatar_uri = uri.map(str::to_string);
                    true
                }
                None => false,
            }
        };
        if changed {
            self.persist_profile();
        }
    }

    fn replace(&self, session: Session) {
        *self.token.write().unwrap() = session.token.clone();
        *self.state.lock().unwrap() = session;
    }

    fn persist_profile(&self) {
        let profile = SavedProfile {
            user: self.snapshot().user,
        };
        if let Err(e) = self.store.save_profile(&profile) {
            warn!("Failed to persist profile: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_store::FileSessionStore;
    use tempfile::TempDir;

    fn service(tmp: &TempDir) -> SessionService {
        let store = Arc::new(FileSessionStore::new(tmp.path()).unwrap());
        SessionService::new(store)
    }

    #[test]
    fn test_login_logout_round_trip() {
        let tmp = TempDir::new().unwrap();
        let svc = service(&tmp);

        svc.login("token_1".to_string(), User::new(1, "a@b.com", "Ana"));
        let snap = svc.snapshot();
        assert!(snap.is_authenticated());
        assert_eq!(snap.token.as_deref(), Some("token_1"));
        assert_eq!(svc.shared_token().read().unwrap().as_deref(), Some("token_1"));

        svc.logout();
        let snap = svc.snapshot();
        assert!(!snap.is_authenticated());
        assert!(snap.token.is_none());
        assert!(svc.shared_token().read().unwrap().is_none());
    }

    #[test]
    fn test_restore_picks_up_persisted_session() {
        let tmp = TempDir::new().unwrap();
        {
            let svc = service(&tmp);
            svc.login("token_2".to_string(), User::new(2, "b@c.com", "Ben"));
        }

        // Fresh service over the same directory, as on process start
        let svc = service(&tmp);
        assert!(!svc.snapshot().is_authenticated());
        svc.restore();
        let snap = svc.snapshot();
        assert_eq!(snap.user.unwrap().email, "b@c.com");
        assert_eq!(snap.token.as_deref(), Some("token_2"));
    }

    #[test]
    fn test_restore_with_empty_store_means_no_session() {
        let tmp = TempDir::new().unwrap();
        let svc = service(&tmp);
        svc.restore();
        assert!(!svc.snapshot().is_authenticated());
    }

    #[test]
    fn test_profile_edits_require_a_user() {
        let tmp = TempDir::new().unwrap();
        let svc = service(&tmp);

        // No user: edits are no-ops
        svc.set_display_name("Ghost");
        assert!(svc.current_user().is_none());

        svc.login("token_3".to_string(), User::new(3, "c@d.com", "Cam"));
        svc.set_display_name("Camille");
        svc.set_avatar_uri(Some("file:///avatar.png"));

        let user = svc.current_user().unwrap();
        assert_eq!(user.display_name, "Camille");
        assert_eq!(user.avatar_uri.as_deref(), Some("file:///avatar.png"));

        svc.set_avatar_uri(None);
        assert!(svc.current_user().unwrap().avatar_uri.is_none());
    }

    #[test]
    fn test_profile_edit_survives_restart() {
        let tmp = TempDir::new().unwrap();
        {
            let svc = service(&tmp);
            svc.login("token_4".to_string(), User::new(4, "d@e.com", "Dee"));
            svc.set_display_name("Delia");
        }

        let svc = service(&tmp);
        svc.restore();
        assert_eq!(svc.current_user().unwrap().display_name, "Delia");
    }
}
