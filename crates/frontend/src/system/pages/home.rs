use leptos::prelude::*;
use leptos_router::components::A;

use crate::system::auth::context::use_auth;

/// Minimal landing page. Everything interesting lives behind the admin routes.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="landing">
            <h1 class="landing__brand">"ReSpare"</h1>
            <p class="landing__tagline">"Used auto parts, sourced and delivered."</p>
            <div class="landing__links">
                <Show
                    when=move || auth.is_logged_in()
                    fallback=|| {
                        view! {
                            <A href="/admin/login" attr:class="button button--primary">
                                "Admin Login"
                            </A>
                        }
                    }
                >
                    <A href="/orderList" attr:class="button button--primary">
                        "Go to Orders"
                    </A>
                </Show>
            </div>
        </div>
    }
}
