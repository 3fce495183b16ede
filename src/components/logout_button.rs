//! Logout Button
//!
//! Hidden until a session token exists. On success the session is cleared
//! and the client returns to the login page; on failure the session is
//! left intact so the user can retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::navigate;
use crate::context::use_session;
use crate::notify;

#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = use_session();

    let process_logout = move |_| {
        spawn_local(async move {
            match api::auth::logout(&session.store.token()).await {
                Ok(()) => {
                    session.clear();
                    navigate("/");
                }
                Err(err) => notify::error(&err.to_string()),
            }
        });
    };

    view! {
        <button
            type="button"
            class="logout-button"
            hidden=move || !session.has_token()
            on:click=process_logout
        >
            "Logout"
        </button>
    }
}
