use contracts::session::AuthUser;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session across reloads
pub fn save_session(token: &str, user: &AuthUser) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Restore a persisted session, if both halves are present and parse
pub fn load_session() -> Option<(String, AuthUser)> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let user_json = storage.get_item(USER_KEY).ok()??;
    let user = serde_json::from_str(&user_json).ok()?;
    Some((token, user))
}

/// Drop the persisted session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
