use std::collections::HashSet;

use contracts::domain::supplier::Supplier;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::suppliers::api;
use crate::domain::suppliers::ui::form::SupplierForm;
use crate::domain::suppliers::ui::item::VendorCard;
use crate::shared::components::loader::Loader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::modal_stack::use_modal_stack;

impl Searchable for Supplier {
    fn matches_filter(&self, filter: &str) -> bool {
        self.display_name().to_lowercase().contains(filter)
            || self
                .phone
                .as_deref()
                .is_some_and(|p| p.contains(filter))
            || self
                .part_groups
                .iter()
                .any(|tag| tag.to_lowercase().contains(filter))
    }
}

/// Vendor directory page.
#[component]
pub fn VendorsPage() -> impl IntoView {
    let (suppliers, set_suppliers) = signal::<Vec<Supplier>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let hidden = RwSignal::new(HashSet::<Uuid>::new());

    let modal_stack = use_modal_stack();

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_suppliers().await {
                Ok(list) => {
                    set_suppliers.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let visible = move || filter_list(suppliers.get(), &search.get());

    let toggle_hidden = Callback::new(move |id: Uuid| {
        hidden.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    });

    let open_add_vendor = move |_| {
        modal_stack.push_with_style(
            Some("max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()),
            move |handle| {
                let on_done = {
                    let handle = handle.clone();
                    Callback::new(move |_| {
                        handle.close();
                        fetch();
                    })
                };
                let on_cancel = {
                    let handle = handle.clone();
                    Callback::new(move |_| handle.close())
                };
                view! { <SupplierForm on_done=on_done on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Vendors"</h1>
                </div>
                <div class="header__actions">
                    <input
                        type="search"
                        placeholder="Search name, phone or category"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" on:click=open_add_vendor>
                        {icon("plus")}
                        "Add Vendor"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">{e}</span>
                            </div>
                        }
                    })
            }}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <Loader message="Loading vendors..." /> }
            >
                <div class="vendor-grid">
                    <For
                        each=visible
                        key=|supplier| supplier.id
                        children=move |supplier| {
                            let id = supplier.id;
                            view! {
                                <VendorCard
                                    supplier=supplier
                                    is_hidden=Signal::derive(move || hidden.get().contains(&id))
                                    on_toggle_hidden=toggle_hidden
                                    on_refresh=Callback::new(move |_| fetch())
                                />
                            }
                        }
                    />
                </div>
                <Show when=move || visible().is_empty()>
                    <p class="table__empty">
                        {move || {
                            if suppliers.get().is_empty() {
                                "No vendors yet."
                            } else {
                                "No vendors match the current search."
                            }
                        }}
                    </p>
                </Show>
            </Show>
        </div>
    }
}
