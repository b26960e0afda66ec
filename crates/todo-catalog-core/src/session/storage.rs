//! Session Storage
//!
//! Durable string key/value storage. The browser build backs it with
//! `localStorage`; `MemoryStorage` stands in everywhere else.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::SessionError;

pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries().remove(key);
        Ok(())
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        (**self).remove(key)
    }
}
