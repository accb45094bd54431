use contracts::domain::quote::{PartQuality, Quote, QuotePatch, QuoteStatus};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::quotes::api;
use crate::shared::components::info_row::InfoRow;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::toast::use_toast;

fn price(value: f64) -> String {
    format!("₹{value:.2}")
}

pub fn status_label(status: QuoteStatus) -> &'static str {
    match status {
        QuoteStatus::Pending => "Pending",
        QuoteStatus::AcceptedByCustomer => "Accepted",
        QuoteStatus::ApprovedByAdmin => "Approved",
        QuoteStatus::CancelledByAdmin => "Cancelled",
        QuoteStatus::Rejected => "Rejected",
    }
}

#[component]
pub fn BidItem(
    quote: Quote,
    #[prop(into)] is_hidden: Signal<bool>,
    on_toggle_hidden: Callback<Uuid>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let modal_stack = use_modal_stack();
    let toast = use_toast();

    let quote_id = quote.id;
    let supplier = quote.supplier_name().to_string();
    let buy = price(quote.buy_price);
    let sell = quote.sell_price.map(price);
    let status = quote.status;
    let remarks = quote.remarks.clone();
    let delivery_eta = quote.delivery_eta.clone();

    let open_edit = {
        let quote = quote.clone();
        move |_| {
            set_menu_open.set(false);
            let quote = quote.clone();
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
                view! { <EditBidForm quote=quote.clone() on_done=on_done on_cancel=on_cancel /> }
                    .into_any()
            });
        }
    };

    let open_admin_cancel = move |_| {
        set_menu_open.set(false);
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

    let open_details = {
        let quote = quote.clone();
        move |_| {
            set_menu_open.set(false);
            let quote = quote.clone();
            modal_stack.push(move |handle| {
                let quote = quote.clone();
                let on_close = Callback::new(move |_| handle.close());
                view! { <BidDetails quote=quote on_close=on_close /> }.into_any()
            });
        }
    };

    let handle_delete = move |_| {
        set_menu_open.set(false);
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete this bid?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_quote(quote_id).await {
                Ok(()) => {
                    toast.success("Bid deleted");
                    on_refresh.run(());
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="bid-item" class:bid-item--hidden=move || is_hidden.get()>
            <div class="bid-item__main">
                <span class="bid-item__supplier">{supplier}</span>
                <span class="bid-item__price">{buy}</span>
                {sell.map(|s| view! { <span class="bid-item__sell-price">{s}</span> })}
                <span class=format!(
                    "quote-badge quote-badge--{}",
                    format!("{status:?}").to_lowercase(),
                )>{status_label(status)}</span>
                {delivery_eta.map(|eta| view! { <span class="bid-item__eta">{eta}</span> })}
            </div>
            {remarks.map(|r| view! { <p class="bid-item__remarks">{r}</p> })}
            <div class="bid-item__actions dropdown">
                <button
                    class="button button--secondary button--small"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || icon(if menu_open.get() { "chevron-up" } else { "chevron-down" })}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="dropdown__menu">
                        <button class="dropdown__item" on:click=open_edit.clone()>
                            "Edit"
                        </button>
                        <button class="dropdown__item" on:click=open_details.clone()>
                            "Details"
                        </button>
                        <button
                            class="dropdown__item"
                            on:click=move |_| {
                                set_menu_open.set(false);
                                on_toggle_hidden.run(quote_id);
                            }
                        >
                            {move || if is_hidden.get() { "Unhide" } else { "Hide" }}
                        </button>
                        <button
                            class="dropdown__item dropdown__item--danger"
                            disabled=status == QuoteStatus::CancelledByAdmin
                            on:click=open_admin_cancel
                        >
                            "Cancel Bid"
                        </button>
                        <button class="dropdown__item dropdown__item--danger" on:click=handle_delete>
                            "Delete"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Edit the admin-adjustable bid fields.
#[component]
pub fn EditBidForm(quote: Quote, on_done: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let quote_id = quote.id;
    let (buy_price, set_buy_price) = signal(quote.buy_price.to_string());
    let (sell_price, set_sell_price) = signal(
        quote
            .sell_price
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let (part_quality, set_part_quality) = signal(quote.part_quality);
    let (remarks, set_remarks) = signal(quote.remarks.clone().unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let toast = use_toast();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        let buy: f64 = match buy_price.get().trim().parse() {
            Ok(value) if value >= 0.0 => value,
            _ => {
                set_error.set(Some("Buy Price must be a valid number".into()));
                return;
            }
        };
        let sell = match sell_price.get().trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(value) if value >= 0.0 => Some(value),
                _ => {
                    set_error.set(Some("Sell Price must be a valid number".into()));
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

        set_is_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::patch_quote(quote_id, &patch).await {
                Ok(()) => {
                    toast.success("Bid updated");
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
            <h2 class="modal-form__title">"Edit Bid"</h2>

            <div class="form-row">
                <div class="form-group">
                    <label>"Buy Price"</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        prop:value=move || buy_price.get()
                        on:input=move |ev| set_buy_price.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Sell Price"</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        prop:value=move || sell_price.get()
                        on:input=move |ev| set_sell_price.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-group">
                <label>"Part Quality"</label>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_part_quality
                        .set(PartQuality::ALL.into_iter().find(|q| q.label() == value));
                }>
                    <option value="" selected=move || part_quality.get().is_none()>
                        "Select"
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
            </div>

            <div class="form-group">
                <label>"Remarks"</label>
                <textarea
                    prop:value=move || remarks.get()
                    on:input=move |ev| set_remarks.set(event_target_value(&ev))
                ></textarea>
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
                    {move || if is_submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}

/// Cancel a bid on the supplier's behalf. Remarks are mandatory so the
/// supplier sees why.
#[component]
pub fn CancelBidForm(
    quote_id: Uuid,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (remarks, set_remarks) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let toast = use_toast();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        let admin_remarks = remarks.get().trim().to_string();
        if admin_remarks.is_empty() {
            set_error.set(Some("Remarks are required to cancel a bid".into()));
            return;
        }

        set_is_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::admin_cancel_quote(quote_id, admin_remarks).await {
                Ok(()) => {
                    toast.success("Bid cancelled");
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
            <h2 class="modal-form__title">"Cancel Bid"</h2>

            <div class="form-group">
                <label>"Reason"</label>
                <textarea
                    placeholder="Why is this bid being cancelled?"
                    prop:value=move || remarks.get()
                    on:input=move |ev| set_remarks.set(event_target_value(&ev))
                ></textarea>
            </div>

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <div class="modal-form__actions">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    "Keep Bid"
                </button>
                <button
                    type="submit"
                    class="button button--danger"
                    disabled=move || is_submitting.get()
                >
                    {move || if is_submitting.get() { "Cancelling..." } else { "Cancel Bid" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn BidDetails(quote: Quote, on_close: Callback<()>) -> impl IntoView {
    let supplier = quote.supplier_name().to_string();
    view! {
        <div class="modal-form">
            <h2 class="modal-form__title">"Bid Details"</h2>
            <InfoRow label="Supplier" value=supplier />
            <InfoRow label="Buy Price" value=price(quote.buy_price) />
            <InfoRow label="Sell Price" value=quote.sell_price.map(price).unwrap_or_default() />
            <InfoRow
                label="Quality"
                value=quote.part_quality.map(|q| q.label().to_string()).unwrap_or_default()
            />
            <InfoRow label="Delivery ETA" value=quote.delivery_eta.unwrap_or_default() />
            <InfoRow label="Warranty" value=quote.warranty.unwrap_or_default() />
            <InfoRow label="Stock" value=quote.stock_status.unwrap_or_default() />
            <InfoRow label="Status" value=status_label(quote.status).to_string() />
            <InfoRow label="Remarks" value=quote.remarks.unwrap_or_default() />
            <InfoRow label="Admin Remarks" value=quote.admin_remarks.unwrap_or_default() />
            <div class="modal-form__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
