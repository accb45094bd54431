use leptos::prelude::*;

/// Label/value row for detail cards.
#[component]
pub fn InfoRow(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-row__label">{label}</span>
            <span class="info-row__value">{if value.is_empty() { "—".to_string() } else { value }}</span>
        </div>
    }
}
