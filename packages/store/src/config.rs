//! # Application configuration — `portal.toml`
//!
//! Tunables for the login/registration flow. Desktop builds read the file from
//! the platform config directory; the web build always runs on defaults.
//!
//! ## Structure
//!
//! ```toml
//! [auth]
//! min_password_len = 6          # shorter passwords are rejected at registration
//! transition_delay_ms = 1200    # delay between a successful submit and the home view
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`PortalConfig::default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `portal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Login/registration settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum password length, counted in characters.
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
    /// Delay in milliseconds before a successful login or registration
    /// switches to the home view.
    #[serde(default = "default_transition_delay_ms")]
    pub transition_delay_ms: u64,
}

fn default_min_password_len() -> usize {
    6
}

fn default_transition_delay_ms() -> u64 {
    1200
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_len: default_min_password_len(),
            transition_delay_ms: default_transition_delay_ms(),
        }
    }
}

impl AuthConfig {
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}

impl PortalConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = PortalConfig::from_toml("").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.auth.min_password_len, 6);
        assert_eq!(config.auth.transition_delay(), Duration::from_millis(1200));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = PortalConfig::from_toml("[auth]\ntransition_delay_ms = 0\n").unwrap();
        assert_eq!(config.auth.transition_delay_ms, 0);
        assert_eq!(config.auth.min_password_len, 6);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = PortalConfig::default();
        config.auth.min_password_len = 10;
        let text = config.to_toml().unwrap();
        assert!(text.contains("min_password_len = 10"));
        assert_eq!(PortalConfig::from_toml(&text).unwrap(), config);
    }
}
