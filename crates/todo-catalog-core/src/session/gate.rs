//! Session Gate
//!
//! LoggedOut -> LoggingIn -> LoggedIn, with the user persisted as JSON
//! under a single storage key so the session survives reloads.

use crate::domain::{Credentials, SignupForm, User};
use crate::error::{AuthError, SessionError};
use crate::todo::StateHandle;

use super::auth::Authenticator;
use super::storage::SessionStorage;

pub const LOGIN_FAILED: &str = "Login failed";
pub const SIGNUP_FAILED: &str = "Signup failed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    LoggedOut,
    LoggingIn,
    LoggedIn(User),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: SessionPhase,
    /// Shown on the login/signup form
    pub error: Option<String>,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            SessionPhase::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_logging_in(&self) -> bool {
        self.phase == SessionPhase::LoggingIn
    }
}

/// Read the persisted user; anything unreadable is discarded
pub fn load_session<S: SessionStorage + ?Sized>(storage: &S, key: &str) -> Option<User> {
    let raw = match storage.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("cannot read session: {}", e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("discarding corrupt session: {}", e);
            if let Err(e) = storage.remove(key) {
                log::warn!("cannot remove corrupt session: {}", e);
            }
            None
        }
    }
}

pub fn save_session<S: SessionStorage + ?Sized>(
    storage: &S,
    key: &str,
    user: &User,
) -> Result<(), SessionError> {
    let json = serde_json::to_string(user).map_err(|e| SessionError::Encode(e.to_string()))?;
    storage.set(key, &json)
}

/// Holds the LoggingIn phase; dropping it unsettled falls back to LoggedOut
struct LoginAttempt<'a, H: StateHandle<AuthState>> {
    state: &'a H,
    settled: bool,
}

impl<H: StateHandle<AuthState>> LoginAttempt<'_, H> {
    fn settle(mut self) {
        self.settled = true;
    }
}

impl<H: StateHandle<AuthState>> Drop for LoginAttempt<'_, H> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        log::warn!("login abandoned before the authenticator answered");
        self.state.update(|s| {
            if s.phase == SessionPhase::LoggingIn {
                s.phase = SessionPhase::LoggedOut;
            }
        });
    }
}

pub struct SessionGate<S, A, H> {
    storage: S,
    auth: A,
    state: H,
    key: String,
}

impl<S, A, H> SessionGate<S, A, H>
where
    S: SessionStorage,
    A: Authenticator,
    H: StateHandle<AuthState>,
{
    pub fn new(storage: S, auth: A, state: H, key: impl Into<String>) -> Self {
        Self {
            storage,
            auth,
            state,
            key: key.into(),
        }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    /// Enter LoggedIn when a stored session parses, LoggedOut otherwise
    pub fn restore(&self) -> Option<User> {
        let user = load_session(&self.storage, &self.key);
        if let Some(user) = &user {
            log::info!("restored session for {}", user.email);
        }
        let phase = match user.clone() {
            Some(user) => SessionPhase::LoggedIn(user),
            None => SessionPhase::LoggedOut,
        };
        self.state.update(|s| {
            s.phase = phase;
            s.error = None;
        });
        user
    }

    /// `Ok(None)` when the form is incomplete or a login is already running
    pub async fn submit_login(&self, credentials: &Credentials) -> Result<Option<User>, AuthError> {
        if !credentials.is_complete() {
            return Ok(None);
        }
        let Some(attempt) = self.begin() else {
            return Ok(None);
        };
        let result = self.auth.login(credentials).await;
        attempt.settle();
        self.finish(result, LOGIN_FAILED).map(Some)
    }

    pub async fn submit_signup(&self, form: &SignupForm) -> Result<Option<User>, AuthError> {
        if !form.is_complete() {
            return Ok(None);
        }
        let Some(attempt) = self.begin() else {
            return Ok(None);
        };
        let result = self.auth.signup(form).await;
        attempt.settle();
        self.finish(result, SIGNUP_FAILED).map(Some)
    }

    fn begin(&self) -> Option<LoginAttempt<'_, H>> {
        if !self.state.read(|s| s.phase == SessionPhase::LoggedOut) {
            return None;
        }
        self.state.update(|s| {
            s.phase = SessionPhase::LoggingIn;
            s.error = None;
        });
        Some(LoginAttempt {
            state: &self.state,
            settled: false,
        })
    }

    fn finish(&self, result: Result<User, AuthError>, message: &str) -> Result<User, AuthError> {
        match result {
            Ok(user) => {
                if let Err(e) = save_session(&self.storage, &self.key, &user) {
                    log::warn!("session not persisted: {}", e);
                }
                log::info!("logged in as {}", user.email);
                let phase = SessionPhase::LoggedIn(user.clone());
                self.state.update(|s| s.phase = phase);
                Ok(user)
            }
            Err(e) => {
                log::error!("{}: {}", message, e);
                self.state.update(|s| {
                    s.phase = SessionPhase::LoggedOut;
                    s.error = Some(message.to_string());
                });
                Err(e)
            }
        }
    }

    /// Drop the persisted session and return to LoggedOut
    pub fn logout(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("cannot clear session: {}", e);
        }
        self.state.update(|s| *s = AuthState::default());
        log::info!("logged out");
    }
}
