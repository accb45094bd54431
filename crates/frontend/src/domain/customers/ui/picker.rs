use contracts::domain::customer::Customer;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::customers::api;

/// Customer dropdown for the create-order form.
#[component]
pub fn CustomerPicker(on_select: Callback<Customer>) -> impl IntoView {
    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_customers().await {
            Ok(list) => set_customers.set(list),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let handle_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        if let Some(customer) = customers.get().into_iter().find(|c| c.id.to_string() == id) {
            on_select.run(customer);
        }
    };

    view! {
        <select class="customer-picker" on:change=handle_change>
            <option value="">"Select a customer"</option>
            {move || {
                customers
                    .get()
                    .into_iter()
                    .map(|c| {
                        let label = match &c.phone {
                            Some(phone) => format!("{} ({phone})", c.name),
                            None => c.name.clone(),
                        };
                        view! { <option value=c.id.to_string()>{label}</option> }
                    })
                    .collect_view()
            }}
        </select>
        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
    }
}
