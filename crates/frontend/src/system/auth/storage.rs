use web_sys::window;

// Keys the backend-issued session is stored under. They predate this
// client; changing them logs every admin out.
const TOKEN_KEY: &str = "token";
const USER_NAME_KEY: &str = "userName";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn get_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn save_user_name(name: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(USER_NAME_KEY, name);
    }
}

pub fn get_user_name() -> Option<String> {
    local_storage()?.get_item(USER_NAME_KEY).ok()?
}

/// Clear the whole stored session.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_NAME_KEY);
    }
}
