use forge_common::auth::{token_is_live, CredentialProvider};

/// `localStorage` key holding the bearer token.
const TOKEN_KEY: &str = "authToken";
/// Token expiry in Unix seconds, absent when the API sent none.
const EXPIRATION_KEY: &str = "token_expiration";

/// Keeps the bearer token in the browser's `localStorage`, so it survives the
/// page reloads the usage wizard performs after every submission.
#[derive(Debug, Default)]
pub struct LocalStorageCredentials;

impl LocalStorageCredentials {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }

    fn clear(storage: &web_sys::Storage) {
        storage.remove_item(TOKEN_KEY).ok();
        storage.remove_item(EXPIRATION_KEY).ok();
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn current_token(&self) -> Option<String> {
        let storage = Self::storage()?;
        let token = storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())?;
        let expires_at = storage
            .get_item(EXPIRATION_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.parse::<i64>().ok());

        let now = (js_sys::Date::now() / 1000.0) as i64;
        if token_is_live(expires_at, now) {
            Some(token)
        } else {
            gloo_console::log!("stored session expired");
            Self::clear(&storage);
            None
        }
    }

    fn store_token(&self, token: &str, expires_at: Option<i64>) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let stored = storage.set_item(TOKEN_KEY, token).and_then(|_| match expires_at {
            Some(expires_at) => storage.set_item(EXPIRATION_KEY, &expires_at.to_string()),
            None => storage.remove_item(EXPIRATION_KEY),
        });
        if stored.is_err() {
            gloo_console::error!("could not store the session token");
        }
    }

    fn handle_unauthenticated(&self) {
        if let Some(storage) = Self::storage() {
            Self::clear(&storage);
        }
        gloo_console::log!("session cleared, please log in again");
    }
}
