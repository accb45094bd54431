use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::use_auth;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let handle_logout = {
        let navigate = navigate.clone();
        move |_| {
            auth.logout();
            navigate("/admin/login", Default::default());
        }
    };

    let handle_home = {
        let navigate = navigate.clone();
        move |_| navigate("/", Default::default())
    };

    view! {
        <header class="navbar">
            <button type="button" class="navbar__brand" on:click=handle_home>
                <h1>"ReSpare Admin"</h1>
                <Show when=move || auth.is_logged_in()>
                    <p class="navbar__user">{move || auth.admin_name().unwrap_or_default()}</p>
                </Show>
            </button>

            <Show when=move || auth.is_logged_in()>
                <button class="button button--danger" on:click=handle_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
