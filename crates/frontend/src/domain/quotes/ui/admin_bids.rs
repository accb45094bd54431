use contracts::domain::order::Order;
use contracts::domain::quote::{PartQuality, Quote, QuotePatch, QuoteStatus};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api as orders_api;
use crate::domain::orders::ui::list::details_href;
use crate::domain::quotes::api;
use crate::domain::quotes::ui::bid_item::{status_label, CancelBidForm};
use crate::shared::components::loader::Loader;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::toast::use_toast;

/// Bid management page: every bid for one order, with inline editing.
#[component]
pub fn AdminOrderBidsPage() -> impl IntoView {
    let params = use_params_map();
    let order_id = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| Uuid::parse_str(&raw).ok())
    };

    let (order, set_order) = signal::<Option<Order>>(None);
    let (bids, set_bids) = signal::<Vec<Quote>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let Some(id) = order_id() else {
            set_error.set(Some("Invalid order id".into()));
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let order_result = orders_api::fetch_order(id).await;
            let bids_result = api::fetch_admin_bids(id).await;
            match (order_result, bids_result) {
                (Ok(o), Ok(b)) => {
                    set_order.set(Some(o));
                    set_bids.set(b);
                    set_error.set(None);
                }
                (Err(e), _) | (_, Err(e)) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <a class="button button--secondary button--small" href="/orderList">
                        {icon("arrow-left")}
                        "Orders"
                    </a>
                    <h1 class="header__title">
                        {move || {
                            order
                                .get()
                                .map(|o| format!("Bids For Order #{}", o.short_id()))
                                .unwrap_or_else(|| "Bids".to_string())
                        }}
                    </h1>
                </div>
                <div class="header__actions">
                    {move || {
                        order
                            .get()
                            .map(|o| {
                                view! {
                                    <a
                                        class="button button--secondary"
                                        href=details_href(o.id, o.status)
                                    >
                                        "View Order Details"
                                    </a>
                                }
                            })
                    }}
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

            {move || {
                order
                    .get()
                    .map(|o| {
                        view! {
                            <div class="order-summary">
                                <span>{o.customer_name.clone()}</span>
                                <span>{format!("{} {}", o.vehicle_make, o.vehicle_model)}</span>
                                <span>{o.part_names()}</span>
                                <span>{format!("Qty: {}", o.quantity)}</span>
                                <span class=format!(
                                    "status-badge status-badge--{}",
                                    o.status.as_wire().to_lowercase(),
                                )>{o.status.display_label()}</span>
                            </div>
                        }
                    })
            }}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <Loader message="Loading bids..." /> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Supplier"</th>
                                <th class="table__header-cell">"Buy Price"</th>
                                <th class="table__header-cell">"Sell Price"</th>
                                <th class="table__header-cell">"Quality"</th>
                                <th class="table__header-cell">"ETA"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Remarks"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || bids.get()
                                key=|quote| quote.id
                                children=move |quote| {
                                    view! {
                                        <AdminBidRow
                                            quote=quote
                                            on_refresh=Callback::new(move |_| fetch())
                                        />
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <Show when=move || bids.get().is_empty()>
                    <p class="table__empty">"No bids for this order yet."</p>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn AdminBidRow(quote: Quote, on_refresh: Callback<()>) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (buy_price, set_buy_price) = signal(quote.buy_price.to_string());
    let (sell_price, set_sell_price) = signal(
        quote
            .sell_price
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let (part_quality, set_part_quality) = signal(quote.part_quality);
    let (remarks, set_remarks) = signal(quote.remarks.clone().unwrap_or_default());
    let (busy, set_busy) = signal(false);

    let modal_stack = use_modal_stack();
    let toast = use_toast();

    let quote_id = quote.id;
    let supplier = quote.supplier_name().to_string();
    let eta = quote.delivery_eta.clone().unwrap_or_else(|| "—".to_string());
    let status = quote.status;

    let handle_save = move |_| {
        if busy.get() {
            return;
        }
        let buy: f64 = match buy_price.get().trim().parse() {
            Ok(value) if value >= 0.0 => value,
            _ => {
                toast.error("Buy Price must be a valid number");
                return;
            }
        };
        let sell = match sell_price.get().trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(value) if value >= 0.0 => Some(value),
                _ => {
                    toast.error("Sell Price must be a valid number");
                    return;
                }
            },
        };
        let patch = QuotePatch {
            buy_price: Some(buy),
            sell_price: sell,
            part_quality: part_quality.get(),
            remarks: match remarks.get().trim() {
                "" => None,
                r => Some(r.to_string()),
            },
            ..QuotePatch::default()
        };

        set_busy.set(true);
        spawn_local(async move {
            match api::patch_quote(quote_id, &patch).await {
                Ok(()) => {
                    toast.success("Bid updated");
                    set_editing.set(false);
                    on_refresh.run(());
                }
                Err(e) => toast.error(e),
            }
            set_busy.set(false);
        });
    };

    let open_cancel = move |_| {
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
            view! { <CancelBidForm quote_id=quote_id on_done=on_done on_cancel=on_cancel /> }
                .into_any()
        });
    };

    view! {
        <tr class="table__row">
            <td class="table__cell">{supplier}</td>
            <td class="table__cell">
                <Show
                    when=move || editing.get()
                    fallback=move || view! { <span>{format!("₹{}", buy_price.get())}</span> }
                >
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        class="table__inline-input"
                        prop:value=move || buy_price.get()
                        on:input=move |ev| set_buy_price.set(event_target_value(&ev))
                    />
                </Show>
            </td>
            <td class="table__cell">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <span>
                                {move || {
                                    let raw = sell_price.get();
                                    if raw.is_empty() { "—".to_string() } else { format!("₹{raw}") }
                                }}
                            </span>
                        }
                    }
                >
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        class="table__inline-input"
                        prop:value=move || sell_price.get()
                        on:input=move |ev| set_sell_price.set(event_target_value(&ev))
                    />
                </Show>
            </td>
            <td class="table__cell">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <span>
                                {move || {
                                    part_quality
                                        .get()
                                        .map(|q| q.label().to_string())
                                        .unwrap_or_else(|| "—".to_string())
                                }}
                            </span>
                        }
                    }
                >
                    <select
                        class="table__inline-input"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_part_quality
                                .set(PartQuality::ALL.into_iter().find(|q| q.label() == value));
                        }
                    >
                        <option value="" selected=move || part_quality.get().is_none()>
                            "—"
                        </option>
                        {PartQuality::ALL
                            .into_iter()
                            .map(|q| {
                                view! {
                                    <option
                                        value=q.label()
                                        selected=move || part_quality.get() == Some(q)
                                    >
                                        {q.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </Show>
            </td>
            <td class="table__cell">{eta}</td>
            <td class="table__cell">
                <span class=format!(
                    "quote-badge quote-badge--{}",
                    format!("{status:?}").to_lowercase(),
                )>{status_label(status)}</span>
            </td>
            <td class="table__cell">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <span>
                                {move || {
                                    let raw = remarks.get();
                                    if raw.is_empty() { "—".to_string() } else { raw }
                                }}
                            </span>
                        }
                    }
                >
                    <input
                        type="text"
                        class="table__inline-input"
                        prop:value=move || remarks.get()
                        on:input=move |ev| set_remarks.set(event_target_value(&ev))
                    />
                </Show>
            </td>
            <td class="table__cell table__cell--actions">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <button
                                class="button button--secondary button--small"
                                on:click=move |_| set_editing.set(true)
                            >
                                "Edit"
                            </button>
                            <button
                                class="button button--danger button--small"
                                disabled=status == QuoteStatus::CancelledByAdmin
                                on:click=open_cancel
                            >
                                "Cancel"
                            </button>
                        }
                    }
                >
                    <button
                        class="button button--primary button--small"
                        disabled=move || busy.get()
                        on:click=handle_save
                    >
                        {icon("save")}
                        "Save"
                    </button>
                    <button
                        class="button button--secondary button--small"
                        on:click=move |_| set_editing.set(false)
                    >
                        "Discard"
                    </button>
                </Show>
            </td>
        </tr>
    }
}
