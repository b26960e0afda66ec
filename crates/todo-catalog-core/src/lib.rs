//! Todo & Catalog Client Core
//!
//! Platform-neutral logic shared by the browser frontend:
//! - domain: records exchanged with the REST services
//! - catalog: derived product view (filter + sort)
//! - todo: view-state reducer and command dispatcher
//! - session: persisted pseudo-session gating the todo app
//! - api: service traits and their HTTP implementations

pub mod api;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod time;
pub mod todo;

pub use config::ClientConfig;
pub use error::{ApiError, AuthError, SessionError, TodoError, TodoOp};
