//! Domain Layer
//!
//! Records exchanged with the REST services plus id helpers.

mod entity;
mod product;
mod todo;
mod user;

pub use entity::{dedup_by_id, prepend_unique, remove_by_id, Entity};
pub use product::{Category, CategoryId, Product, ProductId};
pub use todo::{CreatedTodo, NewTodo, Todo, TodoId, TodoPatch, DEFAULT_USER_ID};
pub use user::{name_from_email, Credentials, SignupForm, User, UserId};
