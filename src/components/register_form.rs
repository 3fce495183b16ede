//! Registration Page
//!
//! Four-field form; all fields must be present and the passwords must
//! match before any request is built. 201 navigates back to the login
//! page, 409 reports a duplicate account.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::app::navigate;
use crate::{notify, validate};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (repeat_password, set_repeat_password) = signal(String::new());

    let process_registration = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get().trim().to_string();
        let email = email.get().trim().to_string();
        let password = password.get().trim().to_string();
        let repeat_password = repeat_password.get().trim().to_string();
        if let Err(message) =
            validate::register_fields(&username, &email, &password, &repeat_password)
        {
            notify::error(message);
            return;
        }

        spawn_local(async move {
            match api::auth::register(&username, &email, &password).await {
                Ok(()) => navigate("/"),
                Err(err) => notify::error(&err.to_string()),
            }
        });
    };

    view! {
        <main class="register-page">
            <h1>"Create Account"</h1>

            <form class="register-form" on:submit=process_registration>
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
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
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
                <input
                    type="password"
                    placeholder="Repeat password"
                    prop:value=move || repeat_password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_repeat_password.set(input.value());
                    }
                />
                <button type="submit">"Register"</button>
            </form>

            <a href="/">"Back to login"</a>
        </main>
    }
}
