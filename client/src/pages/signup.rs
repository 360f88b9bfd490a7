//! Sign-up page. Submitting marks the entered person as the session user;
//! nothing is sent to the server.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use serde_json::{Value, json};

use crate::state::session::use_session;

/// Build the user payload from the form fields. Requires a name.
pub fn signup_payload(name: &str, email: &str) -> Option<Value> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let email = email.trim();
    Some(if email.is_empty() { json!({ "name": name }) } else { json!({ "name": name, "email": email }) })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(user) = signup_payload(&name.get(), &email.get()) {
            session.login(user);
            name.set(String::new());
            email.set(String::new());
        }
    };

    view! {
        <div>
            <h1 class="text-2xl font-semibold">"Sign up"</h1>
            <form class="mt-2 flex flex-col gap-2" on:submit=on_submit>
                <input type="text" placeholder="Name" bind:value=name/>
                <input type="email" placeholder="Email" bind:value=email/>
                <button type="submit" class="btn btn--primary">"Sign up"</button>
            </form>
        </div>
    }
}
