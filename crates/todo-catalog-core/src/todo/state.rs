//! Todo View-State
//!
//! The todo list plus transient UI state, changed only through
//! `TodoState::reduce`.

use crate::domain::{dedup_by_id, prepend_unique, remove_by_id, Todo, TodoId, TodoPatch, UserId};

/// Which busy flag a command holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Busy {
    Loading,
    Searching,
}

/// Inline title edit in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TodoId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    SetNewTitle(String),
    SetSearchText(String),
    /// Owner used for newly created todos
    SetOwner(Option<UserId>),
    StartEdit { id: TodoId, title: String },
    SetEditText(String),
    CancelEdit,
    /// Close the edit session if it still targets `id`
    FinishEdit(TodoId),
    /// A command started: raise the flag and clear the last error
    Begin(Busy),
    Settle(Busy),
    ReplaceAll(Vec<Todo>),
    /// A created todo: goes to the front and the add input is cleared
    Prepend(Todo),
    Merge { id: TodoId, patch: TodoPatch },
    Remove(TodoId),
    Fail(String),
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub new_title: String,
    pub search_text: String,
    pub edit: Option<EditSession>,
    pub error: Option<String>,
    pub owner: Option<UserId>,
    loading: u32,
    searching: u32,
}

impl TodoState {
    pub fn reduce(&mut self, action: TodoAction) {
        match action {
            TodoAction::SetNewTitle(title) => self.new_title = title,
            TodoAction::SetSearchText(text) => self.search_text = text,
            TodoAction::SetOwner(owner) => self.owner = owner,
            TodoAction::StartEdit { id, title } => {
                self.edit = Some(EditSession { id, text: title });
            }
            TodoAction::SetEditText(text) => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.text = text;
                }
            }
            TodoAction::CancelEdit => self.edit = None,
            TodoAction::FinishEdit(id) => {
                if self.editing_id() == Some(id) {
                    self.edit = None;
                }
            }
            TodoAction::Begin(busy) => {
                *self.counter(busy) += 1;
                self.error = None;
            }
            TodoAction::Settle(busy) => {
                let counter = self.counter(busy);
                *counter = counter.saturating_sub(1);
            }
            TodoAction::ReplaceAll(todos) => self.todos = dedup_by_id(todos),
            TodoAction::Prepend(todo) => {
                prepend_unique(&mut self.todos, todo);
                self.new_title.clear();
            }
            TodoAction::Merge { id, patch } => {
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
                    todo.apply(&patch);
                }
            }
            TodoAction::Remove(id) => {
                remove_by_id(&mut self.todos, id);
                if self.editing_id() == Some(id) {
                    self.edit = None;
                }
            }
            TodoAction::Fail(message) => self.error = Some(message),
            // In-flight commands still hold guards that will settle the counters
            TodoAction::Reset => {
                *self = TodoState {
                    loading: self.loading,
                    searching: self.searching,
                    ..TodoState::default()
                }
            }
        }
    }

    fn counter(&mut self, busy: Busy) -> &mut u32 {
        match busy {
            Busy::Loading => &mut self.loading,
            Busy::Searching => &mut self.searching,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading > 0
    }

    pub fn is_searching(&self) -> bool {
        self.searching > 0
    }

    pub fn is_busy(&self) -> bool {
        self.is_loading() || self.is_searching()
    }

    pub fn editing_id(&self) -> Option<TodoId> {
        self.edit.as_ref().map(|e| e.id)
    }

    pub fn find(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn can_add(&self) -> bool {
        !self.is_loading() && !self.new_title.trim().is_empty()
    }

    pub fn can_search(&self) -> bool {
        !self.is_busy() && !self.search_text.trim().is_empty()
    }

    pub fn can_save_edit(&self) -> bool {
        self.edit.as_ref().is_some_and(|e| !e.text.trim().is_empty())
    }

    /// True when nothing is shown and nothing is loading
    pub fn shows_empty_state(&self) -> bool {
        self.todos.is_empty() && !self.is_loading()
    }
}
