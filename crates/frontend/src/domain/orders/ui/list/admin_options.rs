use contracts::domain::order::Order;
use leptos::prelude::*;

use crate::domain::customers::ui::create_user::CreateUserForm;
use crate::domain::orders::ui::create::CreateOrderForm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;

/// Header dropdown with the admin-only creation flows.
#[component]
pub fn AdminOptions(on_order_created: Callback<Order>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let modal_stack = use_modal_stack();

    let open_create_user = move |_| {
        set_menu_open.set(false);
        modal_stack.push(move |handle| {
            let on_done = {
                let handle = handle.clone();
                Callback::new(move |_| handle.close())
            };
            let on_cancel = {
                let handle = handle.clone();
                Callback::new(move |_| handle.close())
            };
            view! { <CreateUserForm on_done=on_done on_cancel=on_cancel /> }.into_any()
        });
    };

    let open_create_order = move |_| {
        set_menu_open.set(false);
        modal_stack.push_with_style(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            move |handle| {
                let on_created = {
                    let handle = handle.clone();
                    Callback::new(move |order: Order| {
                        handle.close();
                        on_order_created.run(order);
                    })
                };
                let on_cancel = {
                    let handle = handle.clone();
                    Callback::new(move |_| handle.close())
                };
                view! { <CreateOrderForm on_created=on_created on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    view! {
        <div class="dropdown">
            <button
                class="button button--primary"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "Admin Options"
                {move || icon(if menu_open.get() { "chevron-up" } else { "chevron-down" })}
            </button>
            <Show when=move || menu_open.get()>
                <div class="dropdown__menu">
                    <button class="dropdown__item" on:click=open_create_user>
                        {icon("plus")}
                        "Add User"
                    </button>
                    <button class="dropdown__item" on:click=open_create_order>
                        {icon("plus")}
                        "Create Order"
                    </button>
                </div>
            </Show>
        </div>
    }
}
