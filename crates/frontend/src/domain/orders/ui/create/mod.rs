use contracts::domain::customer::Customer;
use contracts::domain::order::{FuelType, Order, OrderDraft, OrderPart};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::customers::ui::picker::CustomerPicker;
use crate::domain::orders::api;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;

/// Create-order form, opened from the orders list as a modal.
#[component]
pub fn CreateOrderForm(on_created: Callback<Order>, on_cancel: Callback<()>) -> impl IntoView {
    let (customer, set_customer) = signal::<Option<Customer>>(None);
    let (vehicle_number, set_vehicle_number) = signal(String::new());
    let (vehicle_make, set_vehicle_make) = signal(String::new());
    let (vehicle_model, set_vehicle_model) = signal(String::new());
    let (fuel_type, set_fuel_type) = signal::<Option<FuelType>>(None);
    let parts = RwSignal::new(vec![OrderPart {
        name: String::new(),
        qty: 1,
    }]);
    let (notes, set_notes) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let toast = use_toast();

    let add_part = move |_| {
        parts.update(|list| {
            list.push(OrderPart {
                name: String::new(),
                qty: 1,
            })
        });
    };

    let remove_part = move |index: usize| {
        parts.update(|list| {
            if list.len() > 1 {
                list.remove(index);
            }
        });
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        let selected = customer.get();
        let draft = OrderDraft {
            customer_id: selected.as_ref().map(|c| c.id),
            customer_name: selected
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            customer_phone: selected.as_ref().and_then(|c| c.phone.clone()),
            customer_email: selected.as_ref().and_then(|c| c.email.clone()),
            customer_city: selected.as_ref().and_then(|c| c.city.clone()),
            customer_state: selected.as_ref().and_then(|c| c.state.clone()),
            vehicle_number: vehicle_number.get().trim().to_uppercase(),
            vehicle_make: vehicle_make.get().trim().to_string(),
            vehicle_model: vehicle_model.get().trim().to_string(),
            fuel_type: fuel_type.get(),
            parts: parts
                .get()
                .into_iter()
                .filter(|p| !p.name.trim().is_empty())
                .collect(),
            quantity: parts.get().iter().map(|p| p.qty).sum::<u32>().max(1),
            notes: notes.get().trim().to_string(),
        };

        if let Err(message) = draft.validate() {
            set_error.set(Some(message));
            return;
        }

        set_is_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_order(&draft).await {
                Ok(order) => {
                    set_is_submitting.set(false);
                    on_created.run(order);
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
            <h2 class="modal-form__title">"Create Order"</h2>

            <div class="form-group">
                <label>"Customer"</label>
                <CustomerPicker on_select=Callback::new(move |c: Customer| set_customer.set(Some(c))) />
            </div>

            <div class="form-group">
                <label>"Vehicle Number"</label>
                <input
                    type="text"
                    placeholder="MH12AB1234"
                    prop:value=move || vehicle_number.get()
                    on:input=move |ev| set_vehicle_number.set(event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Make"</label>
                    <input
                        type="text"
                        placeholder="Hyundai"
                        prop:value=move || vehicle_make.get()
                        on:input=move |ev| set_vehicle_make.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Model"</label>
                    <input
                        type="text"
                        placeholder="i20"
                        prop:value=move || vehicle_model.get()
                        on:input=move |ev| set_vehicle_model.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Fuel"</label>
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_fuel_type
                            .set(FuelType::ALL.into_iter().find(|f| f.label() == value));
                    }>
                        <option value="">"Select"</option>
                        {FuelType::ALL
                            .into_iter()
                            .map(|f| view! { <option value=f.label()>{f.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-group">
                <label>"Parts"</label>
                {move || {
                    parts
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, part)| {
                            view! {
                                <div class="form-row form-row--part">
                                    <input
                                        type="text"
                                        placeholder="Part name"
                                        prop:value=part.name.clone()
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            parts
                                                .update(|list| {
                                                    if let Some(p) = list.get_mut(index) {
                                                        p.name = value;
                                                    }
                                                });
                                        }
                                    />
                                    <input
                                        type="number"
                                        min="1"
                                        prop:value=part.qty.to_string()
                                        on:input=move |ev| {
                                            let qty = event_target_value(&ev).parse().unwrap_or(0);
                                            parts
                                                .update(|list| {
                                                    if let Some(p) = list.get_mut(index) {
                                                        p.qty = qty;
                                                    }
                                                });
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="button button--secondary button--small"
                                        disabled=move || parts.get().len() <= 1
                                        on:click=move |_| remove_part(index)
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <button type="button" class="button button--secondary button--small" on:click=add_part>
                    {icon("plus")}
                    "Add Part"
                </button>
            </div>

            <div class="form-group">
                <label>"Notes"</label>
                <textarea
                    placeholder="Anything the suppliers should know"
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
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
                    {move || if is_submitting.get() { "Creating..." } else { "Create Order" }}
                </button>
            </div>
        </form>
    }
}
