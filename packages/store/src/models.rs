//! # Persisted data model
//!
//! | Type | Storage key | Encoding |
//! |------|-------------|----------|
//! | [`UserRecord`] (as a `Vec`) | `users` | JSON array |
//! | [`UserRecord`] | `currentUser` | JSON object |
//! | [`Theme`] | `theme` | raw string `"light"` / `"dark"` |
//!
//! Field names follow the JSON the browser page has always written
//! (`createdAt` rather than `created_at`), so existing data keeps loading.

use serde::{Deserialize, Serialize};

/// One registered account.
///
/// The password is kept exactly as typed. Nothing in this workspace hashes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Creation time in Unix milliseconds, doubling as the identifier.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    /// RFC 3339 creation timestamp, e.g. `"2024-05-01T10:00:00.000Z"`.
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl UserRecord {
    /// True when both credentials match exactly (no case folding).
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Display theme preference. Absent or unknown values mean [`Theme::Light`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse the raw stored value. Returns `None` for anything but `light`/`dark`.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
