//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, nav::Nav};
use crate::pages::{home::HomePage, signup::SignupPage};
use crate::state::session::provide_session;

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let session = provide_session();

    view! {
        <Title text="MERN Scaffold"/>

        <Show when=move || session.loading()>
            <div class="p-2 text-sm opacity-70">"Loading…"</div>
        </Show>
        <Show when=move || session.has_user()>
            <div class="p-2 text-sm opacity-70">"Welcome!"</div>
        </Show>

        <Router>
            <Nav/>
            <main class="p-2">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
