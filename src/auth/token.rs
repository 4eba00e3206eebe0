//! Persisted bearer token.
//!
//! The token lives in a single file under the platform config dir (the
//! browser build kept it in local storage under a fixed key). All access
//! goes through this store; the API client reads it per request and clears
//! it when the backend answers 401.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;

/// Bearer token storage with an in-memory cache over an optional file.
pub struct TokenStore {
    path: Option<PathBuf>,
    cached: Mutex<Option<String>>,
}

impl TokenStore {
    /// Open a store backed by `path`, loading any previously persisted
    /// token. `None` keeps the token in memory only.
    pub fn new(path: Option<PathBuf>) -> Self {
        let cached = path
            .as_ref()
            .and_then(|p| fs::read_to_string(p).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            path,
            cached: Mutex::new(cached),
        }
    }

    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self::new(None)
    }

    /// Current token, if any.
    pub fn get(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Store a token, persisting it when a path is configured.
    pub fn set(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &token)?;
        }
        *self.lock() = Some(token);
        Ok(())
    }

    /// Drop the token from memory and disk. Removal of a missing file is
    /// not an error.
    pub fn clear(&self) {
        if let Some(path) = &self.path {
            let _ = fs::remove_file(path);
        }
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.cached.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_token_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "loaddev-client-test-{}-{tag}",
            std::process::id()
        ))
    }

    #[test]
    fn test_in_memory_set_get_clear() {
        let store = TokenStore::in_memory();
        assert_eq!(store.get(), None);

        store.set("tok-123").unwrap();
        assert_eq!(store.get(), Some("tok-123".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_persists_across_instances() {
        let path = temp_token_path("persist");
        let store = TokenStore::new(Some(path.clone()));
        store.set("persisted-token").unwrap();

        let reopened = TokenStore::new(Some(path.clone()));
        assert_eq!(reopened.get(), Some("persisted-token".to_string()));

        reopened.clear();
        assert!(!path.exists());
    }

    #[test]
    fn test_clear_removes_file() {
        let path = temp_token_path("clear");
        let store = TokenStore::new(Some(path.clone()));
        store.set("gone-soon").unwrap();
        assert!(path.exists());

        store.clear();
        assert_eq!(store.get(), None);
        assert!(!path.exists());

        // Clearing again is harmless.
        store.clear();
    }

    #[test]
    fn test_missing_file_means_no_token() {
        let store = TokenStore::new(Some(temp_token_path("missing")));
        assert_eq!(store.get(), None);
    }
}
