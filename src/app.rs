//! Recipe Book Frontend App
//!
//! Top-level component: picks the page from the current pathname. The
//! client keeps the original multi-page shape, so moving between pages is
//! real navigation, not an SPA router.

use leptos::prelude::*;

use crate::components::{IngredientPage, LoginPage, RecipePage, RegisterPage};
use crate::context::SessionContext;

/// Full-page navigation.
pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
pub fn App() -> impl IntoView {
    // Provide session context to all pages
    provide_context(SessionContext::new());

    match current_path().as_str() {
        "/register" => view! { <RegisterPage /> }.into_any(),
        "/recipes" => view! { <RecipePage /> }.into_any(),
        "/ingredients" => view! { <IngredientPage /> }.into_any(),
        _ => view! { <LoginPage /> }.into_any(),
    }
}
