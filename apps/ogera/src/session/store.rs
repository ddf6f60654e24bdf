use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::models::{Identity, IdentityPatch, Role};
use crate::session::directory::IdentityDirectory;
use crate::session::storage::SessionStorage;
use crate::session::SessionError;

pub const DEFAULT_SESSION_KEY: &str = "ogera_user";
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Storage slot holding the serialized current identity.
    pub storage_key: String,
    /// Simulated latency floor applied to every login.
    pub login_delay: Duration,
}

/// Point-in-time view of the session, as the shell reports it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub loading: bool,
    pub identity: Option<Identity>,
}

struct SessionState {
    identity: Option<Identity>,
    loading: bool,
}

/// Holds at most one current identity and round-trips it through storage.
///
/// Logins are serialized by `login_gate`: a second login issued while one is in
/// flight waits for the first to resolve, then runs against the resulting state.
/// Every storage write or delete happens under the `state` write guard, so the
/// persisted slot always matches the in-memory identity once the guard drops.
pub struct SessionStore {
    directory: Arc<IdentityDirectory>,
    storage: Arc<dyn SessionStorage>,
    settings: SessionSettings,
    state: RwLock<SessionState>,
    login_gate: Mutex<()>,
}

impl SessionStore {
    pub fn new(
        directory: Arc<IdentityDirectory>,
        storage: Arc<dyn SessionStorage>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            directory,
            storage,
            settings,
            state: RwLock::new(SessionState {
                identity: None,
                loading: true,
            }),
            login_gate: Mutex::new(()),
        }
    }

    /// Restores a previously persisted identity. Absent, unreadable or malformed
    /// values all leave the session logged out. Always clears the loading flag.
    pub async fn restore(&self) -> Option<Identity> {
        let mut state = self.state.write().await;
        let restored = match self.storage.get(&self.settings.storage_key).await {
            Ok(Some(raw)) => match decode_identity(&raw) {
                Ok(identity) => {
                    info!(
                        "Restored session for {} ({})",
                        identity.email,
                        identity.role.as_str()
                    );
                    Some(identity)
                }
                Err(e) => {
                    warn!("Discarding persisted session: {e}");
                    None
                }
            },
            Ok(None) => {
                debug!("No persisted session found");
                None
            }
            Err(e) => {
                warn!("Session storage read failed, starting logged out: {e}");
                None
            }
        };

        state.identity = restored.clone();
        state.loading = false;
        restored
    }

    /// Mock login: waits the configured delay, then resolves `(email, role)` against
    /// the identity directory. The secret is accepted but never checked.
    /// On a miss the prior session is left untouched.
    pub async fn login(
        &self,
        email: &str,
        _secret: &str,
        role: Role,
    ) -> Result<Identity, SessionError> {
        let _gate = self.login_gate.lock().await;
        self.state.write().await.loading = true;

        tokio::time::sleep(self.settings.login_delay).await;

        let mut state = self.state.write().await;
        let result = match self.directory.find(email, role).cloned() {
            Some(identity) => {
                self.persist(&identity).await;
                state.identity = Some(identity.clone());
                info!("Login succeeded for {} ({})", identity.email, role.as_str());
                Ok(identity)
            }
            None => {
                info!("Login rejected for {} ({})", email.trim(), role.as_str());
                Err(SessionError::InvalidCredentials)
            }
        };
        state.loading = false;
        result
    }

    /// Clears the current identity and its persisted copy. Never fails.
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        let previous = state.identity.take();
        if let Err(e) = self.storage.remove(&self.settings.storage_key).await {
            warn!("Failed to delete persisted session: {e}");
        }
        drop(state);
        match previous {
            Some(identity) => info!("Logged out {}", identity.email),
            None => debug!("Logout with no active session"),
        }
    }

    /// Shallow-merges `patch` into the current identity and re-persists it.
    /// Without a current identity this is a silent no-op.
    pub async fn update_identity(&self, patch: IdentityPatch) -> Option<Identity> {
        let mut state = self.state.write().await;
        let identity = match state.identity.as_mut() {
            Some(identity) => identity,
            None => {
                debug!("Identity update ignored: no active session");
                return None;
            }
        };
        patch.apply_to(identity);
        let merged = identity.clone();

        self.persist(&merged).await;
        debug!("Updated identity {}", merged.id);
        Some(merged)
    }

    pub async fn current(&self) -> Option<Identity> {
        self.state.read().await.identity.clone()
    }

    #[cfg(test)]
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            loading: state.loading,
            identity: state.identity.clone(),
        }
    }

    async fn persist(&self, identity: &Identity) {
        let raw = match serde_json::to_string(identity) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize identity {}: {e}", identity.id);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.settings.storage_key, &raw).await {
            warn!("Failed to persist session: {e}");
        }
    }
}

fn decode_identity(raw: &str) -> Result<Identity, SessionError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::seed::{EMPLOYER_ID, LEARNER_ID};
    use crate::dataset::Dataset;
    use crate::session::storage::{FileStorage, MemoryStorage, StorageError};
    use async_trait::async_trait;

    /// Memory storage whose writes take `delay` to land.
    struct SlowSetStorage {
        inner: MemoryStorage,
        delay: Duration,
    }

    #[async_trait]
    impl SessionStorage for SlowSetStorage {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            tokio::time::sleep(self.delay).await;
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key).await
        }

        fn backend(&self) -> &'static str {
            "slow-memory"
        }
    }

    fn slow_storage() -> Arc<dyn SessionStorage> {
        Arc::new(SlowSetStorage {
            inner: MemoryStorage::new(),
            delay: Duration::from_millis(50),
        })
    }

    fn settings() -> SessionSettings {
        SessionSettings {
            storage_key: "test_user".to_string(),
            login_delay: Duration::ZERO,
        }
    }

    fn directory() -> Arc<IdentityDirectory> {
        Arc::new(IdentityDirectory::new(Dataset::demo().identities))
    }

    fn store_with(storage: Arc<dyn SessionStorage>) -> SessionStore {
        SessionStore::new(directory(), storage, settings())
    }

    #[tokio::test]
    async fn test_new_store_is_loading_until_restore() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        assert!(store.is_loading().await);

        assert!(store.restore().await.is_none());
        assert!(!store.is_loading().await);
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn test_login_hit_sets_identity_with_requested_role() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        store.restore().await;

        let identity = store
            .login("student@ogera.com", "anything", Role::Learner)
            .await
            .unwrap();
        assert_eq!(identity.role, Role::Learner);
        assert_eq!(identity.id, LEARNER_ID);
        assert_eq!(store.current().await, Some(identity));
        assert!(!store.is_loading().await);
    }

    #[tokio::test]
    async fn test_login_miss_keeps_prior_identity() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        store
            .login("employer@ogera.com", "pw", Role::Organization)
            .await
            .unwrap();

        let err = store
            .login("employer@ogera.com", "pw", Role::Learner)
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidCredentials));
        assert_eq!(store.current().await.map(|i| i.id), Some(EMPLOYER_ID));
    }

    #[tokio::test]
    async fn test_login_miss_from_logged_out_stays_logged_out() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        assert!(store.login("ghost@ogera.com", "pw", Role::Learner).await.is_err());
        assert!(store.current().await.is_none());
        assert_eq!(storage.get("test_user").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_latency_floor() {
        let store = SessionStore::new(
            directory(),
            Arc::new(MemoryStorage::new()),
            SessionSettings {
                storage_key: "test_user".to_string(),
                login_delay: Duration::from_millis(1000),
            },
        );
        let started = tokio::time::Instant::now();
        store
            .login("admin@ogera.com", "pw", Role::Administrator)
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_restore_in_fresh_store_after_login() {
        let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
        let first = store_with(storage.clone());
        let identity = first
            .login("student@ogera.com", "pw", Role::Learner)
            .await
            .unwrap();

        let second = store_with(storage);
        assert_eq!(second.restore().await, Some(identity.clone()));
        assert_eq!(second.current().await, Some(identity));
    }

    #[tokio::test]
    async fn test_restore_through_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let first = store_with(Arc::new(FileStorage::new(dir.path())));
        let identity = first
            .login("employer@ogera.com", "pw", Role::Organization)
            .await
            .unwrap();

        let second = store_with(Arc::new(FileStorage::new(dir.path())));
        assert_eq!(second.restore().await, Some(identity));
    }

    #[tokio::test]
    async fn test_logout_then_restore_is_empty() {
        let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        store
            .login("student@ogera.com", "pw", Role::Learner)
            .await
            .unwrap();

        store.logout().await;
        assert!(store.current().await.is_none());

        let fresh = store_with(storage);
        assert!(fresh.restore().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_without_session_is_harmless() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        store.logout().await;
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_storage_restores_as_logged_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("test_user", "{not valid json").await.unwrap();

        let store = store_with(storage);
        assert!(store.restore().await.is_none());
        assert!(!store.is_loading().await);
    }

    #[tokio::test]
    async fn test_unknown_role_in_storage_is_corrupt() {
        let storage = Arc::new(MemoryStorage::new());
        let mut value = serde_json::to_value(&Dataset::demo().identities[0]).unwrap();
        value["role"] = serde_json::json!("superuser");
        storage
            .set("test_user", &value.to_string())
            .await
            .unwrap();

        assert!(store_with(storage).restore().await.is_none());
    }

    #[test]
    fn test_decode_identity_reports_storage_corrupt() {
        assert!(matches!(
            decode_identity("[]"),
            Err(SessionError::StorageCorrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_update_identity_merges_and_persists() {
        let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        let before = store
            .login("student@ogera.com", "pw", Role::Learner)
            .await
            .unwrap();

        let after = store
            .update_identity(IdentityPatch {
                location: Some("Abuja".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let mut expected = before.clone();
        expected.location = Some("Abuja".to_string());
        assert_eq!(after, expected);
        assert_eq!(store.current().await, Some(expected.clone()));

        let fresh = store_with(storage);
        assert_eq!(fresh.restore().await, Some(expected));
    }

    #[tokio::test]
    async fn test_update_identity_without_session_is_noop() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        let result = store
            .update_identity(IdentityPatch {
                name: Some("Nobody".to_string()),
                ..Default::default()
            })
            .await;
        assert!(result.is_none());
        assert!(store.current().await.is_none());
        assert_eq!(storage.get("test_user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_logins_are_serialized() {
        let store = Arc::new(store_with(Arc::new(MemoryStorage::new())));
        let a = {
            let store = store.clone();
            tokio::spawn(async move {
                store.login("student@ogera.com", "pw", Role::Learner).await
            })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .login("employer@ogera.com", "pw", Role::Organization)
                    .await
            })
        };
        let a = a.await.unwrap().unwrap();
        let b = b.await.unwrap().unwrap();

        let current = store.current().await.unwrap();
        assert!(current == a || current == b);
        assert!(!store.is_loading().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_during_identity_update_stays_logged_out() {
        let storage = slow_storage();
        let store = Arc::new(store_with(storage.clone()));
        store
            .login("student@ogera.com", "pw", Role::Learner)
            .await
            .unwrap();

        let update = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .update_identity(IdentityPatch {
                        location: Some("Lagos".to_string()),
                        ..Default::default()
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        store.logout().await;
        assert!(update.await.unwrap().is_some());

        assert!(store.current().await.is_none());
        assert_eq!(storage.get("test_user").await.unwrap(), None);
        assert!(store_with(storage).restore().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_during_login_persist_stays_logged_out() {
        let storage = slow_storage();
        let store = Arc::new(store_with(storage.clone()));
        store.restore().await;

        let login = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .login("employer@ogera.com", "pw", Role::Organization)
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        store.logout().await;
        assert!(login.await.unwrap().is_ok());

        assert!(store.current().await.is_none());
        assert!(store_with(storage).restore().await.is_none());
    }
}
