//! Recipe List Component

use leptos::prelude::*;

use crate::models::Recipe;

/// Render the recipe mirror list (or a search result) with name and
/// instructions per entry.
#[component]
pub fn RecipeList(recipes: ReadSignal<Vec<Recipe>>) -> impl IntoView {
    view! {
        <ul class="recipe-list">
            {move || recipes.get().into_iter().map(|recipe| view! {
                <li>
                    <p class="recipe-name">{recipe.name}</p>
                    <p class="recipe-instructions">{recipe.instructions}</p>
                </li>
            }).collect_view()}
        </ul>
    }
}
