//! Shared storage and configuration constructors for all platforms.
//!
//! Returns a [`store::AuthRepository`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): one file per key via [`store::FileStore`]

use api::SessionManager;
use store::{AuthConfig, AuthRepository, KeyValueStore, PortalConfig};

#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "portal";

/// Create a platform-appropriate repository.
pub fn make_repo() -> AuthRepository<impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        AuthRepository::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        AuthRepository::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR);
        AuthRepository::new(store::FileStore::new(base))
    }
}

/// Session manager over the platform repository.
pub fn make_manager(config: AuthConfig) -> SessionManager<impl KeyValueStore> {
    SessionManager::new(make_repo(), config)
}

/// Load `portal.toml` from the platform config directory.
///
/// A missing file gives the defaults silently; an unreadable or invalid one
/// gives the defaults with a warning. The web build has no config file.
pub fn load_config() -> PortalConfig {
    #[cfg(target_arch = "wasm32")]
    {
        PortalConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let Some(dir) = dirs::config_dir() else {
            return PortalConfig::default();
        };
        let path = dir.join(APP_DIR).join(PortalConfig::filename());
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return PortalConfig::default(),
            Err(e) => {
                tracing::warn!("cannot read {}: {e}", path.display());
                return PortalConfig::default();
            }
        };
        PortalConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("invalid {}: {e}", path.display());
            PortalConfig::default()
        })
    }
}
