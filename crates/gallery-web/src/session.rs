//! Tab-scoped authentication flag. Lives in `sessionStorage`, so it clears
//! when the tab closes.

use web_sys as web;

const AUTH_KEY: &str = "gallery_auth";

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.session_storage().ok().flatten())
}

pub fn is_authenticated() -> bool {
    storage()
        .and_then(|s| s.get_item(AUTH_KEY).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

pub fn set_authenticated() {
    if let Some(s) = storage() {
        let _ = s.set_item(AUTH_KEY, "true");
    }
}

pub fn clear() {
    if let Some(s) = storage() {
        let _ = s.remove_item(AUTH_KEY);
    }
}
