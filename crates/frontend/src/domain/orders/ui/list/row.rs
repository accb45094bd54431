use contracts::domain::order::{Order, OrderAction, OrderPatch, OrderStatus};
use contracts::domain::quote::accepted_quote;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::domain::quotes::api as quotes_api;
use crate::shared::date_utils::{format_date, format_time};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

/// Detail-page link for an order; past bidding the page opens on the
/// final quote.
pub fn details_href(order_id: uuid::Uuid, status: OrderStatus) -> String {
    if status.shows_bid_list() {
        format!("/order/{order_id}")
    } else {
        format!("/order/{order_id}?view=finalQuote")
    }
}

#[component]
pub fn OrderRow(order: Order, on_refresh: Callback<()>) -> impl IntoView {
    // Status changes in place after an action so the row updates without
    // a full refetch.
    let status = RwSignal::new(order.status);
    let (menu_open, set_menu_open) = signal(false);
    let (busy, set_busy) = signal(false);

    let toast = use_toast();

    let order_id = order.id;
    let short_id = order.short_id();
    let timestamp = order.display_timestamp();
    let vehicle_number = order.vehicle_number.clone();
    let vehicle = format!("{} {}", order.vehicle_make, order.vehicle_model);
    let fuel = order.fuel_type.map(|f| f.label());
    let parts = order.part_names();
    let overdue = order.overdue;
    let customer_name = order.customer_name.clone();

    let set_status = move |next: OrderStatus| {
        if status.get().can_transition_to(next) {
            status.set(next);
        }
    };

    // QC assignment: approve the accepted bid, then confirm the order.
    let handle_assign_qc = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let result = async {
                let bids = quotes_api::fetch_admin_bids(order_id).await?;
                let accepted = accepted_quote(&bids)
                    .ok_or_else(|| "No accepted bid found for this order".to_string())?;
                quotes_api::approve_quote(accepted.id).await?;
                api::patch_order(order_id, &OrderPatch::status(OrderStatus::Confirmed)).await
            }
            .await;
            match result {
                Ok(()) => {
                    set_status(OrderStatus::Confirmed);
                    toast.success("QC assigned, order confirmed");
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
                    set_status(OrderStatus::Completed);
                    toast.success("Order marked as delivered");
                }
                Err(e) => toast.error(e),
            }
            set_busy.set(false);
        });
    };

    let handle_cancel = move |_| {
        set_menu_open.set(false);
        if busy.get() || !status.get().admin_can_cancel() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::cancel_order_admin(order_id).await {
                Ok(()) => {
                    set_status(OrderStatus::Cancelled);
                    toast.success("Order cancelled");
                }
                Err(e) => {
                    toast.error(e);
                    // Local state may be stale after a rejected cancel.
                    on_refresh.run(());
                }
            }
            set_busy.set(false);
        });
    };

    let primary_action = move || match status.get().primary_action() {
        Some(OrderAction::ViewBids) => view! {
            <a class="button button--primary button--small" href=format!("/admin/order/{order_id}/bids")>
                "View Bids"
            </a>
        }
        .into_any(),
        Some(OrderAction::AssignQc) => view! {
            <button
                class="button button--primary button--small"
                disabled=move || busy.get()
                on:click=handle_assign_qc
            >
                "Assign QC"
            </button>
        }
        .into_any(),
        Some(OrderAction::MarkDelivered) => view! {
            <button
                class="button button--primary button--small"
                disabled=move || busy.get()
                on:click=handle_mark_delivered
            >
                "Mark Delivered"
            </button>
        }
        .into_any(),
        None => view! { <span class="order-row__no-action"></span> }.into_any(),
    };

    view! {
        <tr class="table__row" class:table__row--overdue=overdue>
            <td class="table__cell">
                <a
                    class="order-row__id"
                    class:order-row__id--cancelled=move || status.get() == OrderStatus::Cancelled
                    href=move || details_href(order_id, status.get())
                >
                    {format!("#{short_id}")}
                </a>
                <Show when=move || overdue>
                    <span class="badge badge--overdue">"Overdue"</span>
                </Show>
            </td>
            <td class="table__cell">
                {match timestamp {
                    Some(dt) => view! {
                        <div>
                            <div>{format_date(dt)}</div>
                            <div class="table__cell-muted">{format_time(dt)}</div>
                        </div>
                    }
                    .into_any(),
                    None => view! { <span>"—"</span> }.into_any(),
                }}
            </td>
            <td class="table__cell">{customer_name}</td>
            <td class="table__cell">
                <div>{vehicle_number}</div>
                <div class="table__cell-muted">
                    {vehicle}
                    {fuel.map(|f| format!(" · {f}"))}
                </div>
            </td>
            <td class="table__cell">{parts}</td>
            <td class="table__cell">
                <span class=move || {
                    format!("status-badge status-badge--{}", status.get().as_wire().to_lowercase())
                }>{move || status.get().display_label()}</span>
            </td>
            <td class="table__cell table__cell--actions">
                {primary_action}
                <div class="dropdown">
                    <button
                        class="button button--secondary button--small"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || icon(if menu_open.get() { "chevron-up" } else { "chevron-down" })}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="dropdown__menu">
                            <a
                                class="dropdown__item"
                                href=format!("/admin/order/{order_id}/bids")
                            >
                                "View All Bids"
                            </a>
                            <a
                                class="dropdown__item"
                                href=move || details_href(order_id, status.get())
                            >
                                "View Details"
                            </a>
                            <button
                                class="dropdown__item dropdown__item--danger"
                                disabled=move || !status.get().admin_can_cancel()
                                on:click=handle_cancel
                            >
                                "Cancel Order"
                            </button>
                        </div>
                    </Show>
                </div>
            </td>
        </tr>
    }
}
