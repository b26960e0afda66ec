//! REST Collaborators
//!
//! Abstract interfaces for the todo and catalog services.
//! `HttpTodoApi`/`HttpCatalogApi` talk JSON over HTTP; tests use in-memory fakes.

mod endpoint;
mod http;

use async_trait::async_trait;

use crate::domain::{Category, NewTodo, Product, Todo, TodoId, TodoPatch, UserId};
use crate::error::ApiError;

pub use endpoint::{CatalogEndpoint, TodoEndpoint};
pub use http::{HttpCatalogApi, HttpTodoApi};

pub type ApiResult<T> = Result<T, ApiError>;

/// Todo service
///
/// Futures are not `Send`: in the browser they are driven by `spawn_local`.
#[async_trait(?Send)]
pub trait TodoApi {
    /// All todos, in server order
    async fn list_all(&self) -> ApiResult<Vec<Todo>>;

    async fn get(&self, id: TodoId) -> ApiResult<Todo>;

    /// Create a todo; the returned record carries the server id
    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo>;

    /// Replace the stored record with the full body
    async fn replace(&self, todo: &Todo) -> ApiResult<Todo>;

    async fn patch(&self, id: TodoId, patch: &TodoPatch) -> ApiResult<Todo>;

    /// `false` when the server had no such record
    async fn delete(&self, id: TodoId) -> ApiResult<bool>;

    async fn by_user(&self, user_id: UserId) -> ApiResult<Vec<Todo>>;

    /// Server-side title search
    async fn search(&self, query: &str) -> ApiResult<Vec<Todo>>;
}

/// Product catalog service
#[async_trait(?Send)]
pub trait CatalogApi {
    async fn list_products(&self) -> ApiResult<Vec<Product>>;

    async fn list_categories(&self) -> ApiResult<Vec<Category>>;
}
