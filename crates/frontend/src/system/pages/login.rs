use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::shared::toast::use_toast;
use crate::system::auth::{api, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let auth = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        let phone_val = phone.get();
        let password_val = password.get();
        let navigate = navigate.clone();

        set_is_submitting.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(phone_val, password_val).await {
                Ok(response) => {
                    auth.login(&response);
                    toast.success("Login successful!");
                    set_is_submitting.set(false);
                    navigate("/orderList", Default::default());
                }
                Err(e) => {
                    toast.error(e.clone());
                    set_error_message.set(Some(e));
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <form class="login-box" on:submit=on_submit>
                <div class="form-group">
                    <input
                        type="tel"
                        placeholder="Enter Phone Number"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                        required
                        disabled=move || is_submitting.get()
                    />
                </div>

                <div class="form-group">
                    <input
                        type="password"
                        placeholder="Enter PIN"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                        disabled=move || is_submitting.get()
                    />
                </div>

                <button
                    type="submit"
                    class="button button--primary button--block"
                    disabled=move || is_submitting.get()
                >
                    {move || if is_submitting.get() { "Logging in..." } else { "Login →" }}
                </button>

                {move || error_message.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <div class="login-footer">
                    <a href="#">"Facing Issue? Contact us"</a>
                </div>
            </form>
        </div>
    }
}
