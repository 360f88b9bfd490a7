use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="p-2 text-xs opacity-60">
            <p>"MERN scaffold"</p>
        </footer>
    }
}
