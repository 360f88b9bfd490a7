//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session;

/// Links to every route, plus a log-out button while a user is set.
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="flex items-center gap-4 p-2">
            <A href="/">"Home"</A>
            <A href="/signup">"Sign up"</A>
            <Show when=move || session.has_user()>
                <button class="btn" on:click=move |_| session.logout()>
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
