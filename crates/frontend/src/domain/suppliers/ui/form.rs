use contracts::domain::supplier::{Supplier, SupplierDraft, PART_GROUPS};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::suppliers::api;
use crate::shared::toast::use_toast;

/// Add/edit vendor form. With `supplier` set it edits, otherwise it
/// creates.
#[component]
pub fn SupplierForm(
    #[prop(optional)] supplier: Option<Supplier>,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing_id = supplier.as_ref().map(|s| s.id);
    let draft = RwSignal::new(match &supplier {
        Some(s) => SupplierDraft::from_supplier(s),
        None => SupplierDraft::default(),
    });
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let toast = use_toast();

    let toggle_group = move |tag: &'static str| {
        draft.update(|d| {
            if let Some(position) = d.part_groups.iter().position(|g| g == tag) {
                d.part_groups.remove(position);
            } else {
                d.part_groups.push(tag.to_string());
            }
        });
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        let payload = match draft.get().validate() {
            Ok(payload) => payload,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_supplier(id, &payload).await,
                None => api::create_supplier(&payload).await,
            };
            match result {
                Ok(()) => {
                    toast.success(if editing_id.is_some() {
                        "Vendor updated"
                    } else {
                        "Vendor added"
                    });
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

    let text_field = move |label: &'static str,
                           placeholder: &'static str,
                           read: fn(&SupplierDraft) -> &String,
                           write: fn(&mut SupplierDraft, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || read(&draft.get()).clone()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| write(d, value));
                    }
                />
            </div>
        }
    };

    view! {
        <form class="modal-form" on:submit=handle_submit>
            <h2 class="modal-form__title">
                {if editing_id.is_some() { "Edit Vendor" } else { "Add Vendor" }}
            </h2>

            <div class="form-row">
                {text_field("Name", "Sai Auto Parts", |d| &d.name, |d, v| d.name = v)}
                {text_field("Phone", "9876543210", |d| &d.phone, |d, v| d.phone = v)}
            </div>

            <div class="form-row">
                {text_field("Email", "", |d| &d.email, |d, v| d.email = v)}
                {text_field("Firm Name", "", |d| &d.firm_name, |d, v| d.firm_name = v)}
            </div>

            <div class="form-row">
                {text_field("GST Number", "", |d| &d.gst_number, |d, v| d.gst_number = v)}
                {text_field("Rating (0-5)", "", |d| &d.rating, |d, v| d.rating = v)}
            </div>

            {text_field("Address", "", |d| &d.address, |d, v| d.address = v)}

            <div class="form-row">
                {text_field("City", "", |d| &d.city, |d, v| d.city = v)}
                {text_field("State", "", |d| &d.state, |d, v| d.state = v)}
                {text_field("Pincode", "", |d| &d.pincode, |d, v| d.pincode = v)}
            </div>

            <div class="form-group">
                <label>"Part Categories"</label>
                <div class="tag-checkboxes">
                    {PART_GROUPS
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <label class="checkbox-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            draft.get().part_groups.iter().any(|g| g == tag)
                                        }
                                        on:change=move |_| toggle_group(tag)
                                    />
                                    {contracts::domain::supplier::tag_label(tag)}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
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
                    {move || {
                        if is_submitting.get() {
                            "Saving..."
                        } else if editing_id.is_some() {
                            "Save Vendor"
                        } else {
                            "Add Vendor"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
