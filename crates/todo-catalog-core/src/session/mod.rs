//! Session Gate
//!
//! Locally persisted pseudo-session in front of the todo commands.

mod auth;
mod gate;
mod storage;

pub use auth::{Authenticator, StubAuthenticator};
pub use gate::{load_session, save_session, AuthState, SessionGate, SessionPhase, LOGIN_FAILED, SIGNUP_FAILED};
pub use storage::{MemoryStorage, SessionStorage};
