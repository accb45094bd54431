use contracts::domain::supplier::{tag_label, Supplier};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::suppliers::api;
use crate::domain::suppliers::ui::form::SupplierForm;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::toast::use_toast;

#[component]
pub fn VendorCard(
    supplier: Supplier,
    #[prop(into)] is_hidden: Signal<bool>,
    on_toggle_hidden: Callback<Uuid>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let modal_stack = use_modal_stack();
    let toast = use_toast();

    let supplier_id = supplier.id;
    let name = supplier.display_name().to_string();
    let phone = supplier.phone.clone().unwrap_or_default();
    let location = supplier.location();
    let gst = supplier.gst_number.clone();
    let rating = supplier.rating;
    let tags: Vec<String> = supplier.part_groups.iter().cloned().collect();

    let open_edit = {
        let supplier = supplier.clone();
        move |_| {
            let supplier = supplier.clone();
            modal_stack.push(move |handle| {
                let on_done = {
                    let handle = handle.clone();
                    Callback::new(move |_| {
                        handle.close();
                        on_refresh.run(());
                    })
                };
                let on_cancel = {
                    let handle = handle.clone();
                    Callback::new(move |_| handle.close())
                };
                view! {
                    <SupplierForm supplier=supplier.clone() on_done=on_done on_cancel=on_cancel />
                }
                .into_any()
            });
        }
    };

    let handle_delete = move |_| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete this vendor? This cannot be undone.")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_supplier(supplier_id).await {
                Ok(()) => {
                    toast.success("Vendor deleted");
                    on_refresh.run(());
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="vendor-card" class:vendor-card--hidden=move || is_hidden.get()>
            <div class="vendor-card__main">
                <span class="vendor-card__name">{name}</span>
                <span class="vendor-card__phone">{phone}</span>
                {rating
                    .map(|r| view! { <span class="vendor-card__rating">{format!("★ {r:.1}")}</span> })}
            </div>
            <div class="vendor-card__meta">
                {(!location.is_empty()).then(|| view! { <span>{location.clone()}</span> })}
                {gst.map(|g| view! { <span class="vendor-card__gst">{format!("GST: {g}")}</span> })}
            </div>
            <Show when={
                let has_tags = !tags.is_empty();
                move || has_tags
            }>
                <div class="vendor-card__tags">
                    {tags
                        .clone()
                        .into_iter()
                        .map(|tag| view! { <span class="tag-chip">{tag_label(&tag)}</span> })
                        .collect_view()}
                </div>
            </Show>
            <div class="vendor-card__actions">
                <button class="button button--secondary button--small" on:click=open_edit>
                    "Edit"
                </button>
                <button
                    class="button button--secondary button--small"
                    on:click=move |_| on_toggle_hidden.run(supplier_id)
                >
                    {move || if is_hidden.get() { "Unhide" } else { "Hide" }}
                </button>
                <button class="button button--danger button--small" on:click=handle_delete>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
