use contracts::domain::order::{Order, OrderPatch};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::orders::api;
use crate::shared::components::card::Card;
use crate::shared::components::info_row::InfoRow;
use crate::shared::components::section_title::SectionTitle;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

/// Order information card with a collapsible body and an inline edit mode
/// for the vehicle fields and notes.
#[component]
pub fn OrderCard(
    order: Order,
    on_refresh: Callback<()>,
    on_cancel_order: Callback<()>,
) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let (editing, set_editing) = signal(false);
    let (busy, set_busy) = signal(false);

    let (vehicle_number, set_vehicle_number) = signal(order.vehicle_number.clone());
    let (vehicle_make, set_vehicle_make) = signal(order.vehicle_make.clone());
    let (vehicle_model, set_vehicle_model) = signal(order.vehicle_model.clone());
    let (part_name, set_part_name) = signal(order.part_names());
    let (quantity, set_quantity) = signal(order.quantity.to_string());
    let (notes, set_notes) = signal(order.notes.clone().unwrap_or_default());

    let toast = use_toast();

    let order_id = order.id;
    let status = order.status;
    let customer_name = order.customer_name.clone();
    let customer_phone = order.customer_phone.clone().unwrap_or_default();
    let customer_location = [&order.customer_city, &order.customer_state]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let fuel = order
        .fuel_type
        .map(|f| f.label().to_string())
        .unwrap_or_default();
    let created = order.created_at.map(format_datetime).unwrap_or_default();

    let handle_save = move |_| {
        if busy.get() {
            return;
        }
        let number = vehicle_number.get().trim().to_uppercase();
        let make = vehicle_make.get().trim().to_string();
        let model = vehicle_model.get().trim().to_string();
        if number.is_empty() || make.is_empty() || model.is_empty() {
            toast.error("Vehicle number, make and model are required");
            return;
        }
        let qty = match quantity.get().trim().parse::<u32>() {
            Ok(value) if value >= 1 => value,
            _ => {
                toast.error("Quantity must be at least 1");
                return;
            }
        };
        let patch = OrderPatch {
            vehicle_number: Some(number),
            vehicle_make: Some(make),
            vehicle_model: Some(model),
            part_name: match part_name.get().trim() {
                "" => None,
                p => Some(p.to_string()),
            },
            quantity: Some(qty),
            notes: Some(notes.get().trim().to_string()),
            ..OrderPatch::default()
        };

        set_busy.set(true);
        spawn_local(async move {
            match api::patch_order(order_id, &patch).await {
                Ok(()) => {
                    toast.success("Order updated");
                    set_editing.set(false);
                    on_refresh.run(());
                }
                Err(e) => toast.error(e),
            }
            set_busy.set(false);
        });
    };

    view! {
        <Card class="order-card">
            <div class="order-card__header">
                <SectionTitle text="Order Details" />
                <div class="order-card__header-actions">
                    <span class=format!(
                        "status-badge status-badge--{}",
                        status.as_wire().to_lowercase(),
                    )>{status.display_label()}</span>
                    <button
                        class="button button--secondary button--small"
                        on:click=move |_| set_collapsed.update(|c| *c = !*c)
                    >
                        {move || icon(if collapsed.get() { "chevron-down" } else { "chevron-up" })}
                    </button>
                </div>
            </div>

            <Show when=move || !collapsed.get()>
                <Show
                    when=move || editing.get()
                    fallback={
                        let customer_name = customer_name.clone();
                        let customer_phone = customer_phone.clone();
                        let customer_location = customer_location.clone();
                        let fuel = fuel.clone();
                        let created = created.clone();
                        move || {
                        view! {
                            <div class="order-card__body">
                                <InfoRow label="Customer" value=customer_name.clone() />
                                <InfoRow label="Phone" value=customer_phone.clone() />
                                <InfoRow label="Location" value=customer_location.clone() />
                                <InfoRow label="Vehicle Number" value=vehicle_number.get() />
                                <InfoRow
                                    label="Vehicle"
                                    value=format!("{} {}", vehicle_make.get(), vehicle_model.get())
                                />
                                <InfoRow label="Fuel" value=fuel.clone() />
                                <InfoRow label="Parts" value=part_name.get() />
                                <InfoRow label="Quantity" value=quantity.get() />
                                <InfoRow label="Notes" value=notes.get() />
                                <InfoRow label="Created" value=created.clone() />
                            </div>
                        }
                    }}
                >
                    <div class="order-card__body order-card__body--editing">
                        <div class="form-group">
                            <label>"Vehicle Number"</label>
                            <input
                                type="text"
                                prop:value=move || vehicle_number.get()
                                on:input=move |ev| set_vehicle_number.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Make"</label>
                                <input
                                    type="text"
                                    prop:value=move || vehicle_make.get()
                                    on:input=move |ev| set_vehicle_make.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Model"</label>
                                <input
                                    type="text"
                                    prop:value=move || vehicle_model.get()
                                    on:input=move |ev| set_vehicle_model.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>"Part"</label>
                                <input
                                    type="text"
                                    prop:value=move || part_name.get()
                                    on:input=move |ev| set_part_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Quantity"</label>
                                <input
                                    type="number"
                                    min="1"
                                    prop:value=move || quantity.get()
                                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label>"Notes"</label>
                            <textarea
                                prop:value=move || notes.get()
                                on:input=move |ev| set_notes.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                    </div>
                </Show>

                <div class="order-card__actions">
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
                                <Show when=move || status.admin_can_cancel()>
                                    <button
                                        class="button button--danger button--small"
                                        on:click=move |_| on_cancel_order.run(())
                                    >
                                        "Cancel Order"
                                    </button>
                                </Show>
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
                </div>
            </Show>
        </Card>
    }
}
