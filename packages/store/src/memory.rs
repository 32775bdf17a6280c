use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// In-memory KeyValueStore for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Theme, UserRecord};
    use crate::repo::{AuthRepository, CURRENT_USER_KEY, THEME_KEY, USERS_KEY};

    fn user(id: i64, email: &str) -> UserRecord {
        UserRecord {
            id,
            name: format!("user {id}"),
            email: email.to_string(),
            password: "secret1".to_string(),
            created_at: "2024-05-01T10:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_store_defaults() {
        let repo = AuthRepository::new(MemoryStore::new());

        assert!(repo.load_directory().await.is_empty());
        assert!(repo.load_session().await.is_none());
        assert_eq!(repo.load_theme().await, Theme::Light);
    }

    #[tokio::test]
    async fn test_directory_keeps_order() {
        let repo = AuthRepository::new(MemoryStore::new());

        let users = vec![user(1, "a@b.com"), user(2, "c@d.com")];
        repo.save_directory(&users).await.unwrap();

        let loaded = repo.load_directory().await;
        assert_eq!(loaded, users);
    }

    #[tokio::test]
    async fn test_session_save_and_clear() {
        let store = MemoryStore::new();
        let repo = AuthRepository::new(store.clone());

        repo.save_session(&user(7, "a@b.com")).await.unwrap();
        assert_eq!(repo.load_session().await.map(|u| u.id), Some(7));

        repo.clear_session().await.unwrap();
        assert!(repo.load_session().await.is_none());
        // The key is removed, not blanked
        assert!(store.get(CURRENT_USER_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_theme_is_stored_as_raw_string() {
        let store = MemoryStore::new();
        let repo = AuthRepository::new(store.clone());

        repo.save_theme(Theme::Dark).await.unwrap();
        assert_eq!(store.get(THEME_KEY).await.as_deref(), Some("dark"));
        assert_eq!(repo.load_theme().await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_malformed_values_fall_back() {
        let store = MemoryStore::new();
        store.set(USERS_KEY, "{not json".to_string()).await.unwrap();
        store.set(CURRENT_USER_KEY, "[]".to_string()).await.unwrap();
        store.set(THEME_KEY, "\"dark\"".to_string()).await.unwrap();

        let repo = AuthRepository::new(store);
        assert!(repo.load_directory().await.is_empty());
        assert!(repo.load_session().await.is_none());
        assert_eq!(repo.load_theme().await, Theme::Light);
    }

    #[tokio::test]
    async fn test_strict_directory_load() {
        let store = MemoryStore::new();
        let repo = AuthRepository::new(store.clone());

        // Absent is an empty directory, not an error
        assert!(repo.load_directory_strict().await.unwrap().is_empty());

        store.set(USERS_KEY, "{not json".to_string()).await.unwrap();
        assert!(matches!(
            repo.load_directory_strict().await,
            Err(StoreError::Json(_))
        ));
        // The lenient load still falls back
        assert!(repo.load_directory().await.is_empty());
    }

    #[tokio::test]
    async fn test_reads_json_written_by_browser_page() {
        let store = MemoryStore::new();
        store
            .set(
                USERS_KEY,
                r#"[{"id":1714557600000,"name":"Ana","email":"a@b.com","password":"secret1","createdAt":"2024-05-01T10:00:00.000Z"}]"#
                    .to_string(),
            )
            .await
            .unwrap();

        let repo = AuthRepository::new(store);
        let users = repo.load_directory().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ana");
        assert!(users[0].matches("a@b.com", "secret1"));
    }
}
