//! User list shown by the home page.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch is logged and otherwise ignored: the list stays in
//! `Loading` and keeps rendering the loading text. There is no retry.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use serde_json::Value;

pub const LOADING_LABEL: &str = "Loading users…";

/// Page-local user collection, replaced wholesale on every successful fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UserList {
    #[default]
    Loading,
    Loaded(Vec<Value>),
}

impl UserList {
    /// Fold a fetch outcome into the list.
    pub fn apply(&mut self, result: Result<Vec<Value>, String>) {
        match result {
            Ok(users) => {
                log::debug!("fetched {} users", users.len());
                *self = Self::Loaded(users);
            }
            Err(e) => log::error!("Failed to fetch users: {e}"),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Loading => None,
            Self::Loaded(users) => Some(users.len()),
        }
    }

    /// Text rendered under the page heading.
    pub fn label(&self) -> String {
        match self.count() {
            Some(n) => format!("Users loaded: {n}"),
            None => LOADING_LABEL.to_owned(),
        }
    }
}
