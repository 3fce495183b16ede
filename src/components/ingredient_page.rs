//! Ingredient Page
//!
//! Owns the ingredient mirror list: loaded on mount and on every reload
//! trigger, replaced wholesale with the server's listing. A failed fetch
//! is reported and leaves the previous mirror on screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{IngredientList, LogoutButton};
use crate::context::{use_list, use_session, ListContext};
use crate::models::Ingredient;
use crate::{lookup, notify, validate};

#[component]
pub fn IngredientPage() -> impl IntoView {
    let session = use_session();
    let (ingredients, set_ingredients) = signal(Vec::<Ingredient>::new());

    let list_ctx = ListContext::new(signal(0u32));
    provide_context(list_ctx);

    // Fetch the listing on mount and whenever a form asks for a reload.
    Effect::new(move |_| {
        let _ = list_ctx.reload_trigger.get();
        spawn_local(async move {
            match api::ingredient::list(&session.store.token()).await {
                Ok(loaded) => set_ingredients.set(loaded),
                Err(err) => notify::error(&err.to_string()),
            }
        });
    });

    view! {
        <main class="ingredient-page">
            <h1>"Ingredients"</h1>

            <AddIngredientForm />
            <DeleteIngredientForm ingredients=ingredients />

            <IngredientList ingredients=ingredients />

            <a href="/recipes">"Back to recipes"</a>
            <LogoutButton />
        </main>
    }
}

/// Create form. The authoritative list always comes from the server, so a
/// successful create clears the input and reloads instead of inserting
/// locally.
#[component]
fn AddIngredientForm() -> impl IntoView {
    let session = use_session();
    let ctx = use_list();

    let (name, set_name) = signal(String::new());

    let add_ingredient = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        if let Err(message) = validate::ingredient_name(&name_value) {
            notify::error(message);
            return;
        }

        spawn_local(async move {
            match api::ingredient::create(&session.store.token(), &name_value).await {
                Ok(()) => {
                    set_name.set(String::new());
                    ctx.reload();
                }
                Err(err) => notify::error(&err.to_string()),
            }
        });
    };

    view! {
        <form class="add-ingredient-form" on:submit=add_ingredient>
            <input
                type="text"
                placeholder="Ingredient name..."
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

/// Delete form. The id is resolved against the in-memory mirror (exact
/// name, first match wins); an unknown name is a local error and no
/// request is sent.
#[component]
fn DeleteIngredientForm(ingredients: ReadSignal<Vec<Ingredient>>) -> impl IntoView {
    let session = use_session();
    let ctx = use_list();

    let (name, set_name) = signal(String::new());

    let delete_ingredient = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        if let Err(message) = validate::ingredient_name(&name_value) {
            notify::error(message);
            return;
        }
        let Some(id) = lookup::ingredient_id_by_name(&ingredients.get(), &name_value) else {
            notify::error("Ingredient not found in the current list!");
            return;
        };

        spawn_local(async move {
            match api::ingredient::delete(&session.store.token(), id).await {
                Ok(()) => {
                    set_name.set(String::new());
                    ctx.reload();
                }
                Err(err) => notify::error(&err.to_string()),
            }
        });
    };

    view! {
        <form class="delete-ingredient-form" on:submit=delete_ingredient>
            <input
                type="text"
                placeholder="Ingredient to delete..."
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <button type="submit">"Delete"</button>
        </form>
    }
}
