//! Error Types
//!
//! `ApiError` describes what went wrong on the wire; `TodoError` is what a
//! command reports. Users only ever see `TodoError::user_message`.

use thiserror::Error;

use crate::domain::TodoId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("response did not carry a record id")]
    MissingId,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Which todo command failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoOp {
    List,
    Search,
    Create,
    Update(TodoId),
    Delete(TodoId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("{op:?} failed: {source}")]
    Network {
        op: TodoOp,
        #[source]
        source: ApiError,
    },
    #[error("todo {0} is not in the list")]
    NotFound(TodoId),
}

impl TodoError {
    pub fn network(op: TodoOp, source: ApiError) -> Self {
        TodoError::Network { op, source }
    }

    /// Fixed text shown in the error slot
    pub fn user_message(&self) -> String {
        match self {
            TodoError::Network { op, .. } => match op {
                TodoOp::List => "Failed to fetch todos".to_string(),
                TodoOp::Search => "Failed to search todos".to_string(),
                TodoOp::Create => "Failed to create todo".to_string(),
                TodoOp::Update(id) => format!("Failed to update todo with ID: {}", id),
                TodoOp::Delete(id) => format!("Failed to delete todo with ID: {}", id),
            },
            TodoError::NotFound(id) => format!("Todo with ID: {} is no longer in the list", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Storage(String),
    #[error("session encode failed: {0}")]
    Encode(String),
}
