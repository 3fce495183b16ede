//! Application Context
//!
//! Shared state provided via Leptos Context API. No module-level globals:
//! the session store and the reload trigger travel through context objects
//! constructed at mount and dropped with the page.

use leptos::prelude::*;

use crate::session::SessionStore;

/// Session credentials, provided by `App` to every page.
///
/// `sessionStorage` is not a reactive source, so token presence is
/// mirrored into a signal here: views that gate on it (the logout button)
/// re-render when a login or logout goes through, not only at mount. All
/// writes must go through `set_session`/`clear` to keep the two in step.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub store: SessionStore,
    has_token: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        let store = SessionStore;
        Self {
            store,
            has_token: RwSignal::new(store.has_token()),
        }
    }

    pub fn set_session(&self, token: &str, is_admin: &str) {
        self.store.set_session(token, is_admin);
        self.has_token.set(!token.is_empty());
    }

    pub fn clear(&self) {
        self.store.clear();
        self.has_token.set(false);
    }

    /// Reactive token presence.
    pub fn has_token(&self) -> bool {
        self.has_token.get()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// Reload trigger for a page's mirror list, provided by the page that owns
/// the list so its form components can ask for a re-fetch.
#[derive(Clone, Copy)]
pub struct ListContext {
    /// Bumped to re-run the page's load effect - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl ListContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a fresh fetch of the owning page's list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_list() -> ListContext {
    use_context::<ListContext>().expect("ListContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_presence_tracks_login_and_logout() {
        let session = SessionContext::new();
        assert!(!session.has_token());

        session.set_session("abc123", "true");
        assert!(session.has_token());

        session.clear();
        assert!(!session.has_token());
    }

    #[test]
    fn empty_credential_does_not_count_as_a_session() {
        let session = SessionContext::new();
        session.set_session("", "false");
        assert!(!session.has_token());
    }
}
