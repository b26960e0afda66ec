//! Todo Entity
//!
//! A single todo record as exchanged with the todo REST service.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::user::UserId;

pub type TodoId = i64;

/// Used when no session user is known, as the service expects one
pub const DEFAULT_USER_ID: UserId = 1;

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            user_id: None,
        }
    }

    /// Copy of this todo with the patch laid over it
    pub fn merged(&self, patch: &TodoPatch) -> Self {
        let mut todo = self.clone();
        todo.apply(patch);
        todo
    }

    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Partial field set for update/patch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

/// Body for the create endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub user_id: UserId,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, user_id: Option<UserId>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            user_id: user_id.unwrap_or(DEFAULT_USER_ID),
        }
    }
}

/// Create response. The id is optional on the wire so a missing one can be reported.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTodo {
    pub id: Option<TodoId>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl CreatedTodo {
    pub fn into_todo(self) -> Option<Todo> {
        let id = self.id?;
        Some(Todo {
            id,
            title: self.title,
            completed: self.completed,
            user_id: self.user_id,
        })
    }
}
