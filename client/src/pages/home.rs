//! Home page: fetches the user collection once on mount and shows its size.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::net::api;
use crate::net::scope::{self, FetchScope};
use crate::state::users::UserList;

/// Bind `fetch` to a new scope. The returned task hands the outcome to
/// `write` unless the scope is cancelled before the response arrives.
pub(crate) fn user_fetch<F, W>(fetch: F, write: W) -> (FetchScope, impl Future<Output = ()>)
where
    F: Future<Output = Result<Vec<Value>, String>>,
    W: FnOnce(Result<Vec<Value>, String>),
{
    let (fetch_scope, request) = scope::scoped(fetch);
    (fetch_scope, scope::deliver(request, write))
}

/// Home page. While the fetch is pending, or after it fails, it shows
/// "Loading users…".
#[component]
pub fn HomePage() -> impl IntoView {
    let users = RwSignal::new(UserList::default());

    // Runs once after mount; unmount cancels the scope.
    Effect::new(move || {
        let (fetch_scope, task) =
            user_fetch(api::fetch_users(), move |result| users.update(|list| list.apply(result)));
        spawn_local(task);
        on_cleanup(move || fetch_scope.cancel());
    });

    let status_class = move || {
        if users.with(UserList::is_loaded) { "mt-2 text-sm opacity-80" } else { "mt-2 text-sm opacity-60" }
    };

    view! {
        <div>
            <h1 class="text-2xl font-semibold">"Home"</h1>
            <div class=status_class>{move || users.with(UserList::label)}</div>
        </div>
    }
}
