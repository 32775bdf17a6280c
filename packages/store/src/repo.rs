//! # Repository — typed access to the persisted auth state
//!
//! [`AuthRepository`] turns a string-keyed [`KeyValueStore`] into the handful of
//! typed operations the session manager needs. The same logic runs against
//! browser `localStorage`, plain files on desktop, or an in-memory map in tests.
//!
//! ## [`KeyValueStore`] trait
//!
//! An async interface with three methods: `get` for reading a value, `set` and
//! `remove` for writing. Implementations live in sibling modules
//! ([`crate::memory`], `file_store`, `local_storage`).
//!
//! ## Keys
//!
//! | Key | Value | Methods |
//! |-----|-------|---------|
//! | [`USERS_KEY`] | JSON array of [`UserRecord`] | [`load_directory`](AuthRepository::load_directory), [`load_directory_strict`](AuthRepository::load_directory_strict), [`save_directory`](AuthRepository::save_directory) |
//! | [`CURRENT_USER_KEY`] | JSON [`UserRecord`] | [`load_session`](AuthRepository::load_session), [`save_session`](AuthRepository::save_session), [`clear_session`](AuthRepository::clear_session) |
//! | [`THEME_KEY`] | `"light"` / `"dark"` | [`load_theme`](AuthRepository::load_theme), [`save_theme`](AuthRepository::save_theme) |
//!
//! ## Fallbacks
//!
//! Loads never fail. Absent keys give the default (empty directory, no session,
//! light theme); values that do not decode are logged and treated as absent.
//! The one exception is [`load_directory_strict`](AuthRepository::load_directory_strict),
//! used when the directory is about to be rewritten.

use crate::error::StoreError;
use crate::models::{Theme, UserRecord};

pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const THEME_KEY: &str = "theme";

/// Async trait for a string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// Typed auth storage backed by a [`KeyValueStore`].
pub struct AuthRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AuthRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every registered account, in registration order.
    pub async fn load_directory(&self) -> Vec<UserRecord> {
        let Some(raw) = self.store.get(USERS_KEY).await else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("ignoring malformed `{USERS_KEY}` value: {e}");
                Vec::new()
            }
        }
    }

    /// Like [`load_directory`](Self::load_directory), but a value that does not
    /// decode is an error instead of an empty directory.
    ///
    /// Use this before [`save_directory`](Self::save_directory) so unreadable
    /// accounts are never overwritten.
    pub async fn load_directory_strict(&self) -> Result<Vec<UserRecord>, StoreError> {
        match self.store.get(USERS_KEY).await {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the stored directory with `users`.
    pub async fn save_directory(&self, users: &[UserRecord]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(users)?;
        self.store.set(USERS_KEY, raw).await
    }

    /// The currently signed-in account, if any.
    pub async fn load_session(&self) -> Option<UserRecord> {
        let raw = self.store.get(CURRENT_USER_KEY).await?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("ignoring malformed `{CURRENT_USER_KEY}` value: {e}");
                None
            }
        }
    }

    pub async fn save_session(&self, user: &UserRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.store.set(CURRENT_USER_KEY, raw).await
    }

    pub async fn clear_session(&self) -> Result<(), StoreError> {
        self.store.remove(CURRENT_USER_KEY).await
    }

    pub async fn load_theme(&self) -> Theme {
        let Some(raw) = self.store.get(THEME_KEY).await else {
            return Theme::default();
        };
        Theme::from_stored(&raw).unwrap_or_else(|| {
            tracing::warn!("ignoring unknown `{THEME_KEY}` value {raw:?}");
            Theme::default()
        })
    }

    pub async fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, theme.as_str().to_string()).await
    }
}
