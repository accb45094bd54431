use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::domain::orders::ui::details::OrderDetailsPage;
use crate::domain::orders::ui::list::OrdersListPage;
use crate::domain::quotes::ui::admin_bids::AdminOrderBidsPage;
use crate::domain::suppliers::ui::list::VendorsPage;
use crate::layout::navbar::Navbar;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;

/// Route table of the dashboard. Must stay in sync with `is_known_route`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavbarSlot />
            <main>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/admin/login") view=LoginPage />
                    <Route path=path!("/orderList") view=OrdersListPage />
                    <Route path=path!("/order/:id") view=OrderDetailsPage />
                    <Route path=path!("/admin/order/:id/bids") view=AdminOrderBidsPage />
                    <Route path=path!("/vendors") view=VendorsPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NavbarSlot() -> impl IntoView {
    let location = use_location();
    view! {
        <Show when=move || navbar_visible(&location.pathname.get())>
            <Navbar />
        </Show>
    }
}

/// The navbar stays hidden on the landing page and on unknown routes.
pub fn navbar_visible(path: &str) -> bool {
    path != "/" && is_known_route(path)
}

fn is_known_route(path: &str) -> bool {
    match path {
        "/" | "/admin/login" | "/orderList" | "/vendors" => true,
        _ => {
            let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
            match segments.as_slice() {
                ["order", id] => !id.is_empty(),
                ["admin", "order", id, "bids"] => !id.is_empty(),
                _ => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_routes_are_known() {
        for path in ["/", "/admin/login", "/orderList", "/vendors"] {
            assert!(is_known_route(path), "{path}");
        }
    }

    #[test]
    fn dynamic_routes_are_known() {
        assert!(is_known_route("/order/42"));
        assert!(is_known_route("/admin/order/a1b2/bids"));
        assert!(!is_known_route("/order/"));
        assert!(!is_known_route("/admin/order/42"));
        assert!(!is_known_route("/somewhere/else"));
    }

    #[test]
    fn navbar_hidden_on_home_and_unknown_routes() {
        assert!(!navbar_visible("/"));
        assert!(!navbar_visible("/nope"));
        assert!(navbar_visible("/orderList"));
        assert!(navbar_visible("/order/42"));
    }
}
