//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `SessionContext` above the router, so every page and
//! component reads the same user, user list, and loading flag. State lives for
//! the page lifetime only; a reload starts from the defaults.
//!
//! User payloads are schemaless JSON values. A JSON `null` is treated the same
//! as "no user".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde_json::Value;

/// Plain session data. `SessionContext` wraps it in a signal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<Value>,
    pub users: Option<Vec<Value>>,
    pub loading: bool,
}

impl SessionState {
    pub fn set_user(&mut self, user: Option<Value>) {
        self.user = user.filter(|v| !v.is_null());
    }

    pub fn set_users(&mut self, users: Option<Vec<Value>>) {
        self.users = users;
    }

    /// Mark `user_data` as the current user. Local only; cannot fail.
    pub fn login(&mut self, user_data: Value) {
        self.loading = true;
        self.set_user(Some(user_data));
        self.loading = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
    }
}

/// Copyable handle to the app-wide session signal.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    pub fn user(&self) -> Option<Value> {
        self.state.with(|s| s.user.clone())
    }

    pub fn has_user(&self) -> bool {
        self.state.with(|s| s.user.is_some())
    }

    pub fn set_user(&self, user: Option<Value>) {
        self.state.update(|s| s.set_user(user));
    }

    pub fn users(&self) -> Option<Vec<Value>> {
        self.state.with(|s| s.users.clone())
    }

    pub fn set_users(&self, users: Option<Vec<Value>>) {
        self.state.update(|s| s.set_users(users));
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn login(&self, user_data: Value) {
        self.state.update(|s| s.login(user_data));
    }

    pub fn logout(&self) {
        self.state.update(SessionState::logout);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the session and provide it to all descendants.
pub fn provide_session() -> SessionContext {
    let session = SessionContext::new();
    provide_context(session);
    session
}

/// Fetch the session provided by an ancestor `App`.
///
/// # Panics
///
/// Panics if called outside the component tree under `provide_session`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
