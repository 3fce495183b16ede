//! Ingredient List Component

use leptos::prelude::*;

use crate::models::Ingredient;

/// Render the ingredient mirror list.
#[component]
pub fn IngredientList(ingredients: ReadSignal<Vec<Ingredient>>) -> impl IntoView {
    view! {
        <ul class="ingredient-list">
            {move || ingredients.get().into_iter().map(|ingredient| view! {
                <li>
                    <p>{ingredient.name}</p>
                </li>
            }).collect_view()}
        </ul>
    }
}
