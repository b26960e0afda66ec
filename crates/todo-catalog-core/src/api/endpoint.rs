//! Endpoint Table
//!
//! Method and path for every call the clients make.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Method;

use crate::domain::{TodoId, UserId};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\')
    .add(b'^')
    .add(b'|')
    .add(b'[')
    .add(b']')
    .add(b'&')
    .add(b'+')
    .add(b';')
    .add(b'=');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoEndpoint<'a> {
    ListAll,
    Get(TodoId),
    Create,
    Replace(TodoId),
    Patch(TodoId),
    Delete(TodoId),
    ByUser(UserId),
    Search(&'a str),
}

impl TodoEndpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            TodoEndpoint::ListAll
            | TodoEndpoint::Get(_)
            | TodoEndpoint::ByUser(_)
            | TodoEndpoint::Search(_) => Method::GET,
            TodoEndpoint::Create => Method::POST,
            TodoEndpoint::Replace(_) => Method::PUT,
            TodoEndpoint::Patch(_) => Method::PATCH,
            TodoEndpoint::Delete(_) => Method::DELETE,
        }
    }

    /// Path relative to the todo base URL
    pub fn path(&self) -> String {
        match self {
            TodoEndpoint::ListAll => "/getAllTodos".to_string(),
            TodoEndpoint::Get(id) | TodoEndpoint::Patch(id) => format!("/{}", id),
            TodoEndpoint::Create => "/createTodo".to_string(),
            TodoEndpoint::Replace(id) => format!("/updateTodo/{}", id),
            TodoEndpoint::Delete(id) => format!("/deleteTodo/{}", id),
            TodoEndpoint::ByUser(user_id) => format!("?userId={}", user_id),
            TodoEndpoint::Search(query) => {
                format!("/searchTodo/{}", utf8_percent_encode(query, PATH_SEGMENT))
            }
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        join(base_url, &self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEndpoint {
    Products,
    Categories,
}

impl CatalogEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            CatalogEndpoint::Products => "/api/products",
            CatalogEndpoint::Categories => "/api/categories",
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        join(base_url, self.path())
    }
}

fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
