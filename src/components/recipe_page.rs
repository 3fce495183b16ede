//! Recipe Page
//!
//! Owns the recipe mirror list. A full listing replaces it wholesale; a
//! search replaces it with the server's filtered result. A 404 on the full
//! listing means "no recipes yet" and empties the list without being an
//! error.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::recipe_forms::{AddRecipeForm, DeleteRecipeForm, UpdateRecipeForm};
use crate::components::{LogoutButton, RecipeList};
use crate::context::{use_session, ListContext};
use crate::error::ApiError;
use crate::models::Recipe;
use crate::notify;

#[component]
pub fn RecipePage() -> impl IntoView {
    let session = use_session();
    let (recipes, set_recipes) = signal(Vec::<Recipe>::new());

    let list_ctx = ListContext::new(signal(0u32));
    provide_context(list_ctx);

    // Fetch the listing on mount and whenever a form asks for a reload.
    Effect::new(move |_| {
        let _ = list_ctx.reload_trigger.get();
        spawn_local(async move {
            match api::recipe::list(&session.store.token()).await {
                Ok(loaded) => set_recipes.set(loaded),
                Err(ApiError::NotFound) => {
                    set_recipes.set(Vec::new());
                    notify::info("No recipes found.");
                }
                Err(err) => notify::error(&err.to_string()),
            }
        });
    });

    view! {
        <main class="recipe-page">
            <h1>"Recipes"</h1>

            <a class="admin-link" href="/ingredients" hidden=move || !session.store.is_admin()>
                "Manage ingredients"
            </a>
            <LogoutButton />

            <SearchBar set_recipes=set_recipes />

            <AddRecipeForm />
            <UpdateRecipeForm />
            <DeleteRecipeForm />

            <RecipeList recipes=recipes />
        </main>
    }
}

/// Search form. The filtered result is rendered directly; the next full
/// listing (mount or reload) replaces it again.
#[component]
fn SearchBar(set_recipes: WriteSignal<Vec<Recipe>>) -> impl IntoView {
    let session = use_session();

    let (term, set_term) = signal(String::new());

    let search_recipes = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let term_value = term.get().trim().to_string();

        spawn_local(async move {
            match api::recipe::search(&session.store.token(), &term_value).await {
                Ok(found) => set_recipes.set(found),
                Err(err) => notify::error(&err.to_string()),
            }
        });
    };

    view! {
        <form class="search-form" on:submit=search_recipes>
            <input
                type="text"
                placeholder="Search recipes..."
                prop:value=move || term.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_term.set(input.value());
                }
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
