//! File-backed session store
//!
//! Two files under the app directory: the secure token slot is a
//! `session_token` file (0600 on unix), the profile slot is `profile.json`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::result::{Error, Result};
use crate::ports::{SavedProfile, SessionStore};

const PROFILE_FILE: &str = "profile.json";
const TOKEN_FILE: &str = "session_token";

/// Session store persisting to the app directory
#[derive(Debug)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .map_err(|e| Error::store(format!("Failed to create app directory: {e}")))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }
}

impl SessionStore for FileSessionStore {
    fn load_profile(&self) -> Result<Option<SavedProfile>> {
        let path = self.profile_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| Error::store(format!("Failed to read profile: {e}")))?;
        let profile = serde_json::from_str(&content)
            .map_err(|e| Error::store(format!("Failed to parse profile: {e}")))?;
        Ok(Some(profile))
    }

    fn save_profile(&self, profile: &SavedProfile) -> Result<()> {
        let content = serde_json::to_string_pretty(profile)
            .map_err(|e| Error::store(format!("Failed to serialize profile: {e}")))?;
        fs::write(self.profile_path(), content)
            .map_err(|e| Error::store(format!("Failed to write profile: {e}")))?;
        Ok(())
    }

    fn load_token(&self) -> Result<Option<String>> {
        let path = self.token_path();
        if !path.exists() {
            return Ok(None);
        }
        let token = fs::read_to_string(&path)
            .map_err(|e| Error::store(format!("Failed to read token: {e}")))?;
        let token = token.trim().to_string();
        Ok(if token.is_empty() { None } else { Some(token) })
    }

    fn save_token(&self, token: &str) -> Result<()> {
        let path = self.token_path();
        fs::write(&path, token).map_err(|e| Error::store(format!("Failed to write token: {e}")))?;

        // Token file is owner-readable only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| Error::store(format!("Failed to restrict token file: {e}")))?;
        }

        Ok(())
    }

    fn delete_token(&self) -> Result<()> {
        let path = self.token_path();
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| Error::store(format!("Failed to delete token: {e}")))?;
        }
        Ok(())
    }
}
