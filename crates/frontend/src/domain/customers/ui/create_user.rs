use contracts::domain::customer::{CustomerDraft, UserRole};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::customers::api;
use crate::domain::suppliers::ui::form::SupplierForm;
use crate::shared::toast::use_toast;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AccountKind {
    User,
    Vendor,
}

/// Add-user modal, opened from Admin Options. A user account is a
/// customer or admin; the vendor variant reuses the vendor form and
/// posts to the suppliers endpoint instead.
#[component]
pub fn CreateUserForm(on_done: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let (kind, set_kind) = signal(AccountKind::User);

    view! {
        <div class="modal-form__stack">
            <div class="toggle-group toggle-group--account-kind">
                <button
                    type="button"
                    class="toggle-group__option"
                    class:toggle-group__option--active=move || kind.get() == AccountKind::User
                    on:click=move |_| set_kind.set(AccountKind::User)
                >
                    "User"
                </button>
                <button
                    type="button"
                    class="toggle-group__option"
                    class:toggle-group__option--active=move || kind.get() == AccountKind::Vendor
                    on:click=move |_| set_kind.set(AccountKind::Vendor)
                >
                    "Vendor"
                </button>
            </div>
            <Show
                when=move || kind.get() == AccountKind::Vendor
                fallback=move || view! { <UserAccountForm on_done=on_done on_cancel=on_cancel /> }
            >
                <SupplierForm on_done=on_done on_cancel=on_cancel />
            </Show>
        </div>
    }
}

#[component]
fn UserAccountForm(on_done: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let (role, set_role) = signal(UserRole::Customer);
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (city, set_city) = signal(String::new());
    let (state, set_state) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_submitting, set_is_submitting) = signal(false);

    let toast = use_toast();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        let draft = CustomerDraft {
            name: name.get(),
            phone: phone.get(),
            email: email.get(),
            password: password.get(),
            city: city.get(),
            state: state.get(),
        };
        let request = match draft.validate(role.get()) {
            Ok(request) => request,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };

        set_is_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_customer(&request).await {
                Ok(()) => {
                    toast.success("User created");
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
            <h2 class="modal-form__title">"Add User"</h2>

            <div class="form-group">
                <label>"Role"</label>
                <div class="toggle-group">
                    <button
                        type="button"
                        class="toggle-group__option"
                        class:toggle-group__option--active=move || role.get() == UserRole::Customer
                        on:click=move |_| set_role.set(UserRole::Customer)
                    >
                        "Customer"
                    </button>
                    <button
                        type="button"
                        class="toggle-group__option"
                        class:toggle-group__option--active=move || role.get() == UserRole::Admin
                        on:click=move |_| set_role.set(UserRole::Admin)
                    >
                        "Admin"
                    </button>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Phone"</label>
                    <input
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"PIN"</label>
                    <input
                        type="password"
                        placeholder="At least 4 digits"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"City"</label>
                    <input
                        type="text"
                        prop:value=move || city.get()
                        on:input=move |ev| set_city.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"State"</label>
                    <input
                        type="text"
                        prop:value=move || state.get()
                        on:input=move |ev| set_state.set(event_target_value(&ev))
                    />
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
                    {move || if is_submitting.get() { "Saving..." } else { "Add User" }}
                </button>
            </div>
        </form>
    }
}
