use leptos::prelude::*;

#[component]
pub fn SectionTitle(#[prop(into)] text: String) -> impl IntoView {
    view! { <div class="section-title">{text}</div> }
}
