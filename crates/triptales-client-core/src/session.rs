use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::models::{Session, UserProfile};

pub const TOKEN_STORAGE_KEY: &str = "tt_token";
pub const USER_STORAGE_KEY: &str = "tt_user";
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write `{key}` to storage")]
    Write { key: String },
    #[error("failed to serialize stored value: {0}")]
    Serialize(String),
}

/// Synchronous string key-value storage, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Typed view over the auth token, cached profile and theme preference.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn token(&self) -> Option<String> {
        self.store
            .get_item(TOKEN_STORAGE_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set_item(TOKEN_STORAGE_KEY, token)
    }

    pub fn has_session(&self) -> bool {
        self.token().is_some()
    }

    /// Cached profile. Corrupt JSON reads as no profile at all.
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.store.get_item(USER_STORAGE_KEY)?;
        match serde_json::from_str::<Option<UserProfile>>(&raw) {
            Ok(user) => user,
            Err(error) => {
                tracing::warn!(%error, "ignoring unreadable cached user profile");
                None
            }
        }
    }

    pub fn set_user(&self, user: &UserProfile) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(user)
            .map_err(|error| StorageError::Serialize(error.to_string()))?;
        self.store.set_item(USER_STORAGE_KEY, &serialized)
    }

    pub fn session(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            user: self.user(),
        })
    }

    pub fn persist(&self, session: &Session) -> Result<(), StorageError> {
        self.set_token(&session.token)?;
        if let Some(user) = session.user.as_ref() {
            self.set_user(user)?;
        }
        Ok(())
    }

    /// Drops the token and cached profile. The theme preference survives.
    pub fn clear(&self) {
        self.store.remove_item(TOKEN_STORAGE_KEY);
        self.store.remove_item(USER_STORAGE_KEY);
    }

    pub fn theme_preference(&self) -> Option<String> {
        self.store.get_item(THEME_STORAGE_KEY)
    }

    pub fn set_theme_preference(&self, value: &str) -> Result<(), StorageError> {
        self.store.set_item(THEME_STORAGE_KEY, value)
    }
}
