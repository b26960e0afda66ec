//! Todo Application Context
//!
//! Signals and command handles provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_catalog_core::api::HttpTodoApi;
use todo_catalog_core::domain::{Credentials, SignupForm, User};
use todo_catalog_core::session::{AuthState, SessionGate, StubAuthenticator};
use todo_catalog_core::todo::{CommandResult, StateHandle, TodoAction, TodoDispatcher, TodoState};
use todo_catalog_core::ClientConfig;

use crate::storage::BrowserStorage;

/// Lets core code drive a reactive signal
pub struct SignalHandle<T: 'static>(RwSignal<T>);

impl<T: 'static> Clone for SignalHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalHandle<T> {}

impl<T: Send + Sync + 'static> StateHandle<T> for SignalHandle<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut T)) {
        self.0.update(f);
    }
}

pub type TodoCommands = TodoDispatcher<HttpTodoApi, SignalHandle<TodoState>>;
pub type Session = SessionGate<BrowserStorage, StubAuthenticator, SignalHandle<AuthState>>;

/// App-wide todo state and commands
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Todo list and transient UI state - read via signal
    pub state: RwSignal<TodoState>,
    /// Session phase and login form error
    pub auth: RwSignal<AuthState>,
    commands: StoredValue<Rc<TodoCommands>, LocalStorage>,
    session: StoredValue<Rc<Session>, LocalStorage>,
}

impl TodoContext {
    pub fn new(config: &ClientConfig) -> Self {
        let state = RwSignal::new(TodoState::default());
        let auth = RwSignal::new(AuthState::default());
        let commands = TodoDispatcher::new(
            HttpTodoApi::new(config),
            SignalHandle(state),
            config.list_limit,
        );
        let session = SessionGate::new(
            BrowserStorage,
            StubAuthenticator::new(config.login_delay),
            SignalHandle(auth),
            config.session_key.clone(),
        );
        Self {
            state,
            auth,
            commands: StoredValue::new_local(Rc::new(commands)),
            session: StoredValue::new_local(Rc::new(session)),
        }
    }

    pub fn commands(&self) -> Rc<TodoCommands> {
        self.commands.get_value()
    }

    fn session(&self) -> Rc<Session> {
        self.session.get_value()
    }

    pub fn dispatch(&self, action: TodoAction) {
        self.state.update(|s| s.reduce(action));
    }

    /// Run a command in the background; failures already land in the error slot
    pub fn spawn<F, Fut>(&self, command: F)
    where
        F: FnOnce(Rc<TodoCommands>) -> Fut + 'static,
        Fut: Future<Output = CommandResult> + 'static,
    {
        let commands = self.commands();
        spawn_local(async move {
            let _ = command(commands).await;
        });
    }

    /// Pick up a session persisted by an earlier visit
    pub fn restore(&self) {
        if let Some(user) = self.session().restore() {
            self.enter(user);
        }
    }

    fn enter(&self, user: User) {
        self.dispatch(TodoAction::SetOwner(Some(user.id)));
        self.spawn(|c| async move { c.list().await });
    }

    pub fn login(&self, credentials: Credentials) {
        let ctx = *self;
        let session = self.session();
        spawn_local(async move {
            if let Ok(Some(user)) = session.submit_login(&credentials).await {
                ctx.enter(user);
            }
        });
    }

    pub fn signup(&self, form: SignupForm) {
        let ctx = *self;
        let session = self.session();
        spawn_local(async move {
            if let Ok(Some(user)) = session.submit_signup(&form).await {
                ctx.enter(user);
            }
        });
    }

    /// Clear the session and every piece of todo state
    pub fn logout(&self) {
        self.session().logout();
        self.commands().reset();
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
