//! UI Components
//!
//! Leptos components for the catalog and todo applications.

mod add_todo_form;
mod app_tab_bar;
mod catalog_page;
mod catalog_toolbar;
mod login_form;
mod product_list;
mod search_bar;
mod signup_form;
mod todo_header;
mod todo_item;
mod todo_list;
mod todo_page;

pub use add_todo_form::AddTodoForm;
pub use app_tab_bar::{AppTab, AppTabBar};
pub use catalog_page::CatalogPage;
pub use catalog_toolbar::CatalogToolbar;
pub use login_form::LoginForm;
pub use product_list::ProductList;
pub use search_bar::SearchBar;
pub use signup_form::SignupForm;
pub use todo_header::TodoHeader;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use todo_page::TodoPage;
