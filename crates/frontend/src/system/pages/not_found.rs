use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"404"</h2>
            <p>"This page does not exist."</p>
            <A href="/">"Back to home"</A>
        </div>
    }
}
