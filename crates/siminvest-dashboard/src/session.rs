//! File-backed dashboard session
//!
//! The authentication collaborator: a session marker under the data
//! directory gates the data commands. Logging out removes the marker and
//! leaves the stored dataset untouched.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::AuthConfig;
use crate::constants;

/// Active session identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub logged_in_at: String,
}

fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(constants::SESSION_FILENAME)
}

/// Verify credentials and persist the session marker
pub fn login(data_dir: &Path, auth: &AuthConfig, username: &str, password: &str) -> Result<Session> {
    if username != auth.username || password != auth.password {
        bail!("Username atau password salah");
    }

    let session = Session {
        username: username.to_string(),
        logged_in_at: Utc::now().to_rfc3339(),
    };

    std::fs::create_dir_all(data_dir)?;
    let json = serde_json::to_string_pretty(&session)?;
    std::fs::write(session_path(data_dir), json).context("Failed to write session file")?;

    Ok(session)
}

/// Remove the session marker
pub fn logout(data_dir: &Path) -> Result<()> {
    let path = session_path(data_dir);
    if path.exists() {
        std::fs::remove_file(&path).context("Failed to remove session file")?;
    }
    Ok(())
}

/// The active session, if any
pub fn current_user(data_dir: &Path) -> Option<Session> {
    let text = std::fs::read_to_string(session_path(data_dir)).ok()?;
    serde_json::from_str(&text).ok()
}

/// Bail unless a session is active
pub fn require_session(data_dir: &Path) -> Result<Session> {
    current_user(data_dir)
        .context("No active session. Run `siminvest-dashboard login <username> <password>` first")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_auth() -> AuthConfig {
        AuthConfig {
            username: "admin".to_string(),
            password: "rahasia".to_string(),
        }
    }

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("siminvest-session-test").join(name);
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_login_logout_cycle() {
        let dir = test_dir("cycle");
        let auth = test_auth();

        assert!(current_user(&dir).is_none());
        assert!(require_session(&dir).is_err());

        let session = login(&dir, &auth, "admin", "rahasia").unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(current_user(&dir).unwrap().username, "admin");
        assert!(require_session(&dir).is_ok());

        logout(&dir).unwrap();
        assert!(current_user(&dir).is_none());
    }

    #[test]
    fn test_wrong_credentials_rejected() {
        let dir = test_dir("wrong");
        let auth = test_auth();

        assert!(login(&dir, &auth, "admin", "salah").is_err());
        assert!(login(&dir, &auth, "tamu", "rahasia").is_err());
        assert!(current_user(&dir).is_none());
    }
}
