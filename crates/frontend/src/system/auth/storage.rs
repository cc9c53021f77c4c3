//! Session tokens in localStorage. Storage errors (private mode, quota) are
//! treated as "no token".

use web_sys::{window, Storage};

const ACCESS_TOKEN_KEY: &str = "charter_access_token";
const REFRESH_TOKEN_KEY: &str = "charter_refresh_token";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()?
        .filter(|value| !value.is_empty())
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage: could not store {}", key);
        }
    }
}

pub fn save_access_token(token: &str) {
    write(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

pub fn save_refresh_token(token: &str) {
    write(REFRESH_TOKEN_KEY, token);
}

pub fn get_refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}
