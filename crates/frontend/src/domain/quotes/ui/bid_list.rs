use std::collections::HashSet;

use contracts::domain::quote::{Quote, QuoteDraft};
use contracts::domain::supplier::Supplier;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::quotes::api;
use crate::domain::quotes::ui::bid_item::BidItem;
use crate::domain::suppliers::api as suppliers_api;
use crate::shared::components::card::Card;
use crate::shared::components::section_title::SectionTitle;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::toast::use_toast;

impl Searchable for Quote {
    fn matches_filter(&self, filter: &str) -> bool {
        self.supplier_name().to_lowercase().contains(filter)
            || self.buy_price.to_string().contains(filter)
            || self
                .remarks
                .as_deref()
                .is_some_and(|r| r.to_lowercase().contains(filter))
    }
}

/// Bid list shown on the order detail page while bidding is open.
#[component]
pub fn BidListCard(
    order_id: Uuid,
    #[prop(into)] bids: Signal<Vec<Quote>>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let hidden = RwSignal::new(HashSet::<Uuid>::new());
    let (show_hidden, set_show_hidden) = signal(false);

    let modal_stack = use_modal_stack();

    let visible_bids = move || {
        let filtered = filter_list(bids.get(), &search.get());
        if show_hidden.get() {
            filtered
        } else {
            let hidden_set = hidden.get();
            filtered
                .into_iter()
                .filter(|q| !hidden_set.contains(&q.id))
                .collect()
        }
    };

    let toggle_hidden = Callback::new(move |id: Uuid| {
        hidden.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    });

    let open_new_bid = move |_| {
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
            view! { <BidForm order_id=order_id on_done=on_done on_cancel=on_cancel /> }.into_any()
        });
    };

    view! {
        <Card class="bid-list">
            <div class="bid-list__header">
                <SectionTitle text="Bids" />
                <div class="bid-list__controls">
                    <input
                        type="search"
                        placeholder="Search bids"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <label class="bid-list__show-hidden">
                        <input
                            type="checkbox"
                            prop:checked=move || show_hidden.get()
                            on:change=move |ev| set_show_hidden.set(event_target_checked(&ev))
                        />
                        {move || format!("Show hidden ({})", hidden.get().len())}
                    </label>
                    <button class="button button--primary button--small" on:click=open_new_bid>
                        {icon("plus")}
                        "New Bid"
                    </button>
                </div>
            </div>

            <Show
                when=move || !visible_bids().is_empty()
                fallback=move || {
                    view! {
                        <p class="bid-list__empty">
                            {move || {
                                if bids.get().is_empty() {
                                    "No bids yet. Suppliers have been notified."
                                } else {
                                    "No bids match the current filter."
                                }
                            }}
                        </p>
                    }
                }
            >
                <For
                    each=visible_bids
                    key=|quote| quote.id
                    children=move |quote| {
                        let id = quote.id;
                        view! {
                            <BidItem
                                quote=quote
                                is_hidden=Signal::derive(move || hidden.get().contains(&id))
                                on_toggle_hidden=toggle_hidden
                                on_refresh=on_refresh
                            />
                        }
                    }
                />
            </Show>
        </Card>
    }
}

/// New-bid form, opened from the bid list as a modal.
#[component]
pub fn BidForm(order_id: Uuid, on_done: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let (suppliers, set_suppliers) = signal::<Vec<Supplier>>(Vec::new());
    let draft = RwSignal::new(QuoteDraft::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let toast = use_toast();

    spawn_local(async move {
        match suppliers_api::fetch_suppliers().await {
            Ok(list) => set_suppliers.set(list),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        let validated = match draft.get().validate() {
            Ok(validated) => validated,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_quote(order_id, validated).await {
                Ok(()) => {
                    toast.success("Bid added");
                    set_is_submitting.set(false);
                    on_done.run(());
                }
                Err(e) => {
                    toast.error(e.clone());
                    set_error.set(Some(e));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <form class="modal-form" on:submit=handle_submit>
            <h2 class="modal-form__title">"New Bid"</h2>

            <div class="form-group">
                <label>"Supplier"</label>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.supplier_id = value);
                }>
                    <option value="">"Select a supplier"</option>
                    {move || {
                        suppliers
                            .get()
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <option value=s.id.to_string()>
                                        {s.display_name().to_string()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Buy Price"</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        prop:value=move || draft.get().buy_price
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.buy_price = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Sell Price"</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        prop:value=move || draft.get().sell_price
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.sell_price = value);
                        }
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Delivery ETA"</label>
                    <input
                        type="text"
                        placeholder="2-3 days"
                        prop:value=move || draft.get().delivery_eta
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.delivery_eta = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Warranty"</label>
                    <input
                        type="text"
                        placeholder="1 month"
                        prop:value=move || draft.get().warranty
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.warranty = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Stock"</label>
                    <input
                        type="text"
                        placeholder="In stock"
                        prop:value=move || draft.get().stock_status
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.stock_status = value);
                        }
                    />
                </div>
            </div>

            <div class="form-group">
                <label>"Remarks"</label>
                <textarea
                    prop:value=move || draft.get().remarks
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.remarks = value);
                    }
                ></textarea>
            </div>

            <div class="form-group">
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().notify_lower_bids
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            draft.update(|d| d.notify_lower_bids = checked);
                        }
                    />
                    "Notify suppliers with lower bids"
                </label>
            </div>

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <div class="modal-form__actions">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || is_submitting.get()
                >
                    {move || if is_submitting.get() { "Adding..." } else { "Add Bid" }}
                </button>
            </div>
        </form>
    }
}
