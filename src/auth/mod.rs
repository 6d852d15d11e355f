//! Bearer token persistence.
//!
//! The dashboard keeps a single access token in a file at a fixed configured
//! path; presence of a token gates the dashboard views, and a rejected token
//! is cleared so the next run goes back through login.

use std::fs;
use std::io;
use std::path::PathBuf;

/// File-backed store for the session token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The stored token, if any. An empty or whitespace-only file counts as
    /// no token.
    pub fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Persist a token, creating the parent directory if needed.
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Drop the stored token. Clearing an absent token is fine.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_load_clear_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("nested").join("token"));

        assert!(store.load().is_none());

        store.save("abc123").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc123"));

        store.clear().unwrap();
        assert!(store.load().is_none());
        // clearing again is a no-op
        store.clear().unwrap();
    }

    #[test]
    fn whitespace_only_file_is_no_token() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("token"));
        store.save("  \n").unwrap();
        assert!(store.load().is_none());
    }
}
