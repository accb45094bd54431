mod admin_options;
mod row;

pub use row::details_href;

use std::cmp::Ordering;

use contracts::domain::order::Order;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::shared::components::loader::Loader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::toast::use_toast;

use admin_options::AdminOptions;
use row::OrderRow;

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "date" => self.display_timestamp().cmp(&other.display_timestamp()),
            "status" => self.status.display_label().cmp(other.status.display_label()),
            "customer" => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            "vehicle" => {
                let a = format!("{} {}", self.vehicle_make, self.vehicle_model).to_lowercase();
                let b = format!("{} {}", other.vehicle_make, other.vehicle_model).to_lowercase();
                a.cmp(&b)
            }
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn OrdersListPage() -> impl IntoView {
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    // Newest first by default.
    let (sort_field, set_sort_field) = signal("date".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let toast = use_toast();

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(list) => {
                    set_orders.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_sort = move |field: &'static str| {
        if sort_field.get() == field {
            set_sort_ascending.update(|asc| *asc = !*asc);
        } else {
            set_sort_field.set(field.to_string());
            set_sort_ascending.set(field != "date");
        }
    };

    let sorted_orders = move || {
        let mut list = orders.get();
        sort_list(&mut list, &sort_field.get(), sort_ascending.get());
        list
    };

    let handle_order_created = Callback::new(move |order: Order| {
        toast.success("Order created");
        set_orders.update(|list| list.insert(0, order));
    });

    let sort_header = move |field: &'static str, label: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| handle_sort(field)
            >
                {label}
                <span class=move || {
                    get_sort_class(&sort_field.get(), field)
                }>{move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}</span>
            </th>
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Orders"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                    <AdminOptions on_order_created=handle_order_created />
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
                fallback=|| view! { <Loader message="Loading orders..." /> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Order"</th>
                                {sort_header("date", "Date")}
                                {sort_header("customer", "Customer")}
                                {sort_header("vehicle", "Vehicle")}
                                <th class="table__header-cell">"Parts"</th>
                                {sort_header("status", "Status")}
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=sorted_orders
                                key=|order| order.id
                                children=move |order| {
                                    view! { <OrderRow order=order on_refresh=Callback::new(move |_| fetch()) /> }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <Show when=move || orders.get().is_empty()>
                    <p class="table__empty">"No orders yet."</p>
                </Show>
            </Show>
        </div>
    }
}
