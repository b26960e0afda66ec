//! Todo Application Core
//!
//! View-state reducer, request tracking and the command dispatcher.

mod dispatcher;
mod handle;
mod state;
mod tracker;

pub use dispatcher::{BusyGuard, CommandResult, Outcome, TodoDispatcher};
pub use handle::StateHandle;
pub use state::{Busy, EditSession, TodoAction, TodoState};
pub use tracker::{RequestTracker, Target, Ticket};
