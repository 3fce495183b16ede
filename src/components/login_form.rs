//! Login Page
//!
//! Username/password form. A successful login stores the session and
//! redirects to the recipe page after a short delay.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::app::navigate;
use crate::components::LogoutButton;
use crate::context::use_session;
use crate::{notify, validate};

/// Delay between a successful login and the redirect.
const REDIRECT_DELAY_MS: u32 = 500;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let process_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get().trim().to_string();
        let password = password.get().trim().to_string();
        if let Err(message) = validate::login_fields(&username, &password) {
            notify::error(message);
            return;
        }

        spawn_local(async move {
            match api::auth::login(&username, &password).await {
                Ok(new_session) => {
                    session.set_session(
                        &new_session.token,
                        if new_session.is_admin { "true" } else { "false" },
                    );
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    navigate("/recipes");
                }
                Err(err) => notify::error(&err.login_message()),
            }
        });
    };

    view! {
        <main class="login-page">
            <h1>"Recipe Book"</h1>

            <form class="login-form" on:submit=process_login>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_username.set(input.value());
                    }
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />
                <button type="submit">"Login"</button>
            </form>

            <a href="/register">"Create an account"</a>

            // Visible once a token exists, for signing out again without
            // leaving this page.
            <LogoutButton />
        </main>
    }
}
