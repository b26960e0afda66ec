//! Client Configuration
//!
//! Base URLs and limits. Defaults point at a local development server;
//! builds can bake in other values through environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TODO_BASE_URL: &str = "http://localhost:8080/api/todo";
pub const DEFAULT_CATALOG_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub todo_base_url: String,
    pub catalog_base_url: String,
    #[serde(with = "millis")]
    pub request_timeout: Duration,
    /// Records kept from a full list response
    pub list_limit: usize,
    #[serde(with = "millis")]
    pub login_delay: Duration,
    /// Storage key holding the serialized session
    pub session_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            todo_base_url: DEFAULT_TODO_BASE_URL.to_string(),
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            list_limit: 10,
            login_delay: Duration::from_secs(1),
            session_key: "user".to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `TODO_API_URL`, `CATALOG_API_URL` and
    /// `TODO_LIST_LIMIT` as seen at compile time
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("TODO_API_URL"),
            option_env!("CATALOG_API_URL"),
            option_env!("TODO_LIST_LIMIT"),
        )
    }

    fn with_overrides(todo: Option<&str>, catalog: Option<&str>, limit: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = todo.filter(|s| !s.trim().is_empty()) {
            config.todo_base_url = url.trim().to_string();
        }
        if let Some(url) = catalog.filter(|s| !s.trim().is_empty()) {
            config.catalog_base_url = url.trim().to_string();
        }
        match limit.map(|s| s.trim().parse::<usize>()) {
            Some(Ok(n)) => config.list_limit = n,
            Some(Err(e)) => log::warn!("ignoring TODO_LIST_LIMIT: {}", e),
            None => {}
        }
        config
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
