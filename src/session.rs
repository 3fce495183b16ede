//! Session Store
//!
//! Tab-scoped credentials in `sessionStorage`: the auth token and the admin
//! flag, written at login, read by every authenticated request, removed at
//! logout. The backend's own token validity is authoritative; there is no
//! client-side expiry.

const TOKEN_KEY: &str = "auth-token";
const ADMIN_KEY: &str = "is-admin";

/// Handle over the browser's `sessionStorage`.
///
/// All reads degrade to "no value" when storage is unavailable, so an
/// authenticated request built without a session carries an empty bearer
/// credential and the backend rejects it with 401.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    fn storage(&self) -> Option<web_sys::Storage> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()?.session_storage().ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    pub fn set_session(&self, token: &str, is_admin: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(ADMIN_KEY, is_admin);
        }
    }

    /// The stored token, or `""` when no session exists.
    pub fn token(&self) -> String {
        self.storage()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
            .unwrap_or_default()
    }

    pub fn has_token(&self) -> bool {
        !self.token().is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.storage()
            .and_then(|s| s.get_item(ADMIN_KEY).ok().flatten())
            .map(|flag| flag == "true")
            .unwrap_or(false)
    }

    pub fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(ADMIN_KEY);
        }
    }
}
