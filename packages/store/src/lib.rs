pub mod config;
pub mod error;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{AuthConfig, PortalConfig};
pub use error::StoreError;
pub use models::{Theme, UserRecord};
pub use repo::{AuthRepository, KeyValueStore};
