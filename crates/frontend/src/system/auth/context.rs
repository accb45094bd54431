use contracts::system::auth::LoginResponse;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub admin_name: Option<String>,
}

/// App-wide auth handle. Copy, safe to capture in event handlers.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    fn restore() -> Self {
        // The token is validated by the backend on the first API call;
        // there is no client-side session check beyond presence.
        let state = AuthState {
            token: storage::get_token(),
            admin_name: storage::get_user_name(),
        };
        Self {
            state: RwSignal::new(state),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.get().token.is_some()
    }

    pub fn admin_name(&self) -> Option<String> {
        self.state.get().admin_name
    }

    pub fn login(&self, response: &LoginResponse) {
        storage::save_token(&response.token);
        storage::save_user_name(&response.customer.name);
        self.state.set(AuthState {
            token: Some(response.token.clone()),
            admin_name: Some(response.customer.name.clone()),
        });
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.state.set(AuthState::default());
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::restore());
    children()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
