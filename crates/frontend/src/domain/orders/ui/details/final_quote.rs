use contracts::domain::order::{OrderPatch, OrderStatus};
use contracts::domain::quote::Quote;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::domain::quotes::api as quotes_api;
use crate::domain::quotes::ui::bid_item::EditBidForm;
use crate::shared::components::card::Card;
use crate::shared::components::info_row::InfoRow;
use crate::shared::components::section_title::SectionTitle;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::toast::use_toast;

/// Accepted-quote panel shown once bidding is over.
#[component]
pub fn FinalQuotePreview(
    order_id: Uuid,
    status: OrderStatus,
    quote: Option<Quote>,
    on_status_change: Callback<OrderStatus>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let (busy, set_busy) = signal(false);

    let modal_stack = use_modal_stack();
    let toast = use_toast();

    let quote_id = quote.as_ref().map(|q| q.id);

    // QC assignment: approve the accepted quote, then confirm the order.
    let handle_assign_qc = move |_| {
        let Some(id) = quote_id else {
            toast.error("Accepted quote details are not available");
            return;
        };
        if busy.get() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = async {
                quotes_api::approve_quote(id).await?;
                api::patch_order(order_id, &OrderPatch::status(OrderStatus::Confirmed)).await
            }
            .await;
            match result {
                Ok(()) => {
                    toast.success("QC assigned, order confirmed");
                    on_status_change.run(OrderStatus::Confirmed);
                }
                Err(e) => toast.error(e),
            }
            set_busy.set(false);
        });
    };

    let handle_mark_delivered = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::complete_order(order_id).await {
                Ok(()) => {
                    toast.success("Order marked as delivered");
                    on_status_change.run(OrderStatus::Completed);
                }
                Err(e) => toast.error(e),
            }
            set_busy.set(false);
        });
    };

    let open_edit = {
        let quote = quote.clone();
        move |_| {
            let Some(quote) = quote.clone() else {
                return;
            };
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

    let body = match &quote {
        Some(q) => {
            let supplier = q.supplier_name().to_string();
            let buy = format!("₹{:.2}", q.buy_price);
            let sell = q
                .sell_price
                .map(|v| format!("₹{v:.2}"))
                .unwrap_or_default();
            let quality = q
                .part_quality
                .map(|quality| quality.label().to_string())
                .unwrap_or_default();
            let eta = q.delivery_eta.clone().unwrap_or_default();
            let warranty = q.warranty.clone().unwrap_or_default();
            let remarks = q.remarks.clone().unwrap_or_default();
            let admin_remarks = q.admin_remarks.clone().unwrap_or_default();
            view! {
                <div class="final-quote__body">
                    <InfoRow label="Supplier" value=supplier />
                    <InfoRow label="Buy Price" value=buy />
                    <InfoRow label="Sell Price" value=sell />
                    <InfoRow label="Quality" value=quality />
                    <InfoRow label="Delivery ETA" value=eta />
                    <InfoRow label="Warranty" value=warranty />
                    <InfoRow label="Remarks" value=remarks />
                    <InfoRow label="Admin Remarks" value=admin_remarks />
                </div>
            }
            .into_any()
        }
        None => view! {
            <p class="final-quote__missing">"Accepted quote details are not available."</p>
        }
        .into_any(),
    };

    let actions = match status {
        OrderStatus::QuoteAcceptedByCustomer => view! {
            <button
                class="button button--primary"
                disabled=move || busy.get()
                on:click=handle_assign_qc
            >
                "Assign QC"
            </button>
        }
        .into_any(),
        OrderStatus::Confirmed => view! {
            <button
                class="button button--primary"
                disabled=move || busy.get()
                on:click=handle_mark_delivered
            >
                "Mark as Delivered"
            </button>
        }
        .into_any(),
        OrderStatus::Completed => view! {
            <div class="final-quote__delivered-banner">"✓ Order delivered"</div>
        }
        .into_any(),
        _ => view! { <></> }.into_any(),
    };

    view! {
        <Card class="final-quote">
            <div class="final-quote__header">
                <SectionTitle text="Final Quote" />
                <Show when=move || quote_id.is_some() && status != OrderStatus::Completed>
                    <button
                        class="button button--secondary button--small"
                        on:click=open_edit.clone()
                    >
                        "Edit"
                    </button>
                </Show>
            </div>
            {body}
            <div class="final-quote__actions">{actions}</div>
        </Card>
    }
}
