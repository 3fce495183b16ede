//! Recipe Forms
//!
//! Add, update, and delete forms for the recipe page. Update and delete
//! are two-step workflows: resolve the id by name first, then send the
//! mutating request. A failed resolve aborts before the second request;
//! a 404 on the second request means the record changed in between and
//! is reported as a distinct stale error.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::{use_list, use_session};
use crate::{notify, validate};

#[component]
pub fn AddRecipeForm() -> impl IntoView {
    let session = use_session();
    let ctx = use_list();

    let (name, set_name) = signal(String::new());
    let (instructions, set_instructions) = signal(String::new());

    let add_recipe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        let instructions_value = instructions.get().trim().to_string();
        if let Err(message) = validate::recipe_fields(&name_value, &instructions_value) {
            notify::error(message);
            return;
        }

        spawn_local(async move {
            match api::recipe::create(&session.store.token(), &name_value, &instructions_value)
                .await
            {
                Ok(()) => {
                    set_name.set(String::new());
                    set_instructions.set(String::new());
                    ctx.reload();
                }
                Err(err) => notify::error(&err.to_string()),
            }
        });
    };

    view! {
        <form class="add-recipe-form" on:submit=add_recipe>
            <h2>"Add recipe"</h2>
            <input
                type="text"
                placeholder="Recipe name..."
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <textarea
                placeholder="Instructions..."
                prop:value=move || instructions.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_instructions.set(input.value());
                }
            ></textarea>
            <button type="submit">"Add"</button>
        </form>
    }
}

#[component]
pub fn UpdateRecipeForm() -> impl IntoView {
    let session = use_session();
    let ctx = use_list();

    let (name, set_name) = signal(String::new());
    let (instructions, set_instructions) = signal(String::new());

    let update_recipe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        let instructions_value = instructions.get().trim().to_string();
        if let Err(message) = validate::recipe_fields(&name_value, &instructions_value) {
            notify::error(message);
            return;
        }

        spawn_local(async move {
            let token = session.store.token();
            // Step one: resolve the id. A miss here is terminal and the
            // PUT is never sent.
            let recipe = match api::recipe::resolve(&token, &name_value).await {
                Ok(recipe) => recipe,
                Err(err) => {
                    notify::error(&err.to_string());
                    return;
                }
            };
            match api::recipe::update(&token, recipe.id, &name_value, &instructions_value).await
            {
                Ok(()) => {
                    set_name.set(String::new());
                    set_instructions.set(String::new());
                    ctx.reload();
                }
                Err(err) => notify::error(&err.to_string()),
            }
        });
    };

    view! {
        <form class="update-recipe-form" on:submit=update_recipe>
            <h2>"Update recipe"</h2>
            <input
                type="text"
                placeholder="Recipe name..."
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <textarea
                placeholder="New instructions..."
                prop:value=move || instructions.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_instructions.set(input.value());
                }
            ></textarea>
            <button type="submit">"Update"</button>
        </form>
    }
}

#[component]
pub fn DeleteRecipeForm() -> impl IntoView {
    let session = use_session();
    let ctx = use_list();

    let (name, set_name) = signal(String::new());

    let delete_recipe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        if let Err(message) = validate::recipe_name(&name_value) {
            notify::error(message);
            return;
        }

        spawn_local(async move {
            let token = session.store.token();
            let recipe = match api::recipe::resolve(&token, &name_value).await {
                Ok(recipe) => recipe,
                Err(err) => {
                    notify::error(&err.to_string());
                    return;
                }
            };
            match api::recipe::delete(&token, recipe.id).await {
                Ok(()) => {
                    set_name.set(String::new());
                    ctx.reload();
                }
                Err(err) => notify::error(&err.to_string()),
            }
        });
    };

    view! {
        <form class="delete-recipe-form" on:submit=delete_recipe>
            <h2>"Delete recipe"</h2>
            <input
                type="text"
                placeholder="Recipe to delete..."
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
