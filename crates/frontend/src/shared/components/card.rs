use leptos::prelude::*;

#[component]
pub fn Card(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let class = match class {
        Some(extra) if !extra.is_empty() => format!("card {extra}"),
        _ => "card".to_string(),
    };
    view! { <div class=class>{children()}</div> }
}
