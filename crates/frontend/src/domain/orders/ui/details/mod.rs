mod final_quote;
mod order_card;

use contracts::domain::order::{Order, OrderPatch, OrderStatus};
use contracts::domain::quote::{accepted_quote, Quote};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::domain::quotes::api as quotes_api;
use crate::domain::quotes::ui::bid_list::BidListCard;
use crate::shared::components::loader::Loader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

use final_quote::FinalQuotePreview;
use order_card::OrderCard;

/// While bidding is open the list drives two automatic promotions: the
/// first bid moves `PENDING → QUOTED`, a customer acceptance moves the
/// order on to `QUOTE_ACCEPTED_BY_CUSTOMER`.
async fn promote_for_bids(order: &mut Order, bids: &[Quote]) -> Result<(), String> {
    if order.status == OrderStatus::Pending
        && !bids.is_empty()
        && order.status.can_transition_to(OrderStatus::Quoted)
    {
        log::debug!("order {}: first bid seen, promoting to QUOTED", order.id);
        api::patch_order(order.id, &OrderPatch::status(OrderStatus::Quoted)).await?;
        order.status = OrderStatus::Quoted;
    }
    if accepted_quote(bids).is_some()
        && order
            .status
            .can_transition_to(OrderStatus::QuoteAcceptedByCustomer)
    {
        log::debug!("order {}: accepted bid found, promoting", order.id);
        api::patch_order(
            order.id,
            &OrderPatch::status(OrderStatus::QuoteAcceptedByCustomer),
        )
        .await?;
        order.status = OrderStatus::QuoteAcceptedByCustomer;
    }
    Ok(())
}

#[component]
pub fn OrderDetailsPage() -> impl IntoView {
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

    let toast = use_toast();

    let fetch = move || {
        let Some(id) = order_id() else {
            set_error.set(Some("Invalid order id".into()));
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let result = async {
                let mut fetched = api::fetch_order(id).await?;
                // The bid list is only queried while bidding is open;
                // past that point the accepted quote comes from the
                // admin bids endpoint.
                if fetched.status.shows_bid_list() {
                    let fetched_bids = quotes_api::fetch_order_bids(id).await?;
                    promote_for_bids(&mut fetched, &fetched_bids).await?;
                    if fetched.status.shows_final_quote() {
                        fetched.quotes = Some(fetched_bids.clone());
                    }
                    set_bids.set(fetched_bids);
                } else if fetched.status.shows_final_quote() && fetched.quotes.is_none() {
                    fetched.quotes = Some(quotes_api::fetch_admin_bids(id).await?);
                }
                Ok::<Order, String>(fetched)
            }
            .await;
            match result {
                Ok(fetched) => {
                    set_order.set(Some(fetched));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let status = move || order.get().map(|o| o.status);

    let handle_status_change = Callback::new(move |next: OrderStatus| {
        set_order.update(|current| {
            if let Some(o) = current {
                if o.status.can_transition_to(next) {
                    o.status = next;
                }
            }
        });
    });

    let handle_cancel_order = Callback::new(move |_: ()| {
        let Some(current) = order.get() else {
            return;
        };
        if !current.status.admin_can_cancel() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Cancel this order?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let id = current.id;
        spawn_local(async move {
            match api::cancel_order_admin(id).await {
                Ok(()) => {
                    toast.success("Order cancelled");
                    handle_status_change.run(OrderStatus::Cancelled);
                }
                Err(e) => toast.error(e),
            }
        });
    });

    fetch();

    view! {
        <div class="page page--order-details">
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
                                .map(|o| format!("Order #{}", o.short_id()))
                                .unwrap_or_else(|| "Order".to_string())
                        }}
                    </h1>
                </div>
                <div class="header__actions">
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
                fallback=|| view! { <Loader message="Loading order..." /> }
            >
                {move || {
                    order
                        .get()
                        .map(|o| {
                            view! {
                                <OrderCard
                                    order=o
                                    on_refresh=Callback::new(move |_| fetch())
                                    on_cancel_order=handle_cancel_order
                                />
                            }
                        })
                }}

                <Show when=move || status().is_some_and(|s| s.shows_bid_list())>
                    {move || {
                        order
                            .get()
                            .map(|o| {
                                view! {
                                    <BidListCard
                                        order_id=o.id
                                        bids=bids
                                        on_refresh=Callback::new(move |_| fetch())
                                    />
                                }
                            })
                    }}
                </Show>

                <Show when=move || status().is_some_and(|s| s.shows_final_quote())>
                    {move || {
                        order
                            .get()
                            .map(|o| {
                                let quote = o
                                    .quotes
                                    .as_deref()
                                    .and_then(|quotes| accepted_quote(quotes).cloned());
                                view! {
                                    <FinalQuotePreview
                                        order_id=o.id
                                        status=o.status
                                        quote=quote
                                        on_status_change=handle_status_change
                                        on_refresh=Callback::new(move |_| fetch())
                                    />
                                }
                            })
                    }}
                </Show>
            </Show>
        </div>
    }
}
