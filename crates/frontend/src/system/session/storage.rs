use web_sys::window;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save token and role to localStorage
pub fn save_session(token: &str, role: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(ROLE_KEY, role);
    }
}

/// Get token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Get role from localStorage
pub fn get_role() -> Option<String> {
    get_local_storage()?.get_item(ROLE_KEY).ok()?
}

/// Clear token and role
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}
