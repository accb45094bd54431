use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader__spinner" aria-hidden="true"></div>
            <span class="loader__message">{message}</span>
        </div>
    }
}
