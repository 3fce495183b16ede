//! Mirror-List Lookup
//!
//! Name-to-id resolution against the in-memory mirror of the last server
//! listing. The client operates on human-entered names, so delete and
//! update first resolve an id here (ingredients) or via the backend
//! (recipes) before issuing the mutating request.
//!
//! Names are compared exactly after trimming. Duplicate names are
//! ambiguous: the first match in listing order wins.

use crate::models::{Ingredient, Recipe};

/// Resolve an ingredient id from the mirror list. `None` means the name is
/// not in the last fetched listing and no request should be sent.
pub fn ingredient_id_by_name(mirror: &[Ingredient], name: &str) -> Option<u32> {
    let wanted = name.trim();
    mirror
        .iter()
        .find(|ingredient| ingredient.name.trim() == wanted)
        .map(|ingredient| ingredient.id)
}

/// Pick the exact-name match out of a resolve response.
pub fn recipe_by_name<'a>(recipes: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
    let wanted = name.trim();
    recipes.iter().find(|recipe| recipe.name.trim() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: u32, name: &str) -> Ingredient {
        Ingredient {
            id,
            name: name.to_string(),
        }
    }

    fn recipe(id: u32, name: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            instructions: format!("instructions for {}", name),
        }
    }

    #[test]
    fn resolves_exact_match() {
        let mirror = vec![ingredient(1, "Salt"), ingredient(2, "Pepper")];
        assert_eq!(ingredient_id_by_name(&mirror, "Pepper"), Some(2));
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        let mirror = vec![ingredient(7, " Salt ")];
        assert_eq!(ingredient_id_by_name(&mirror, "Salt"), Some(7));
        assert_eq!(ingredient_id_by_name(&mirror, "  Salt  "), Some(7));
    }

    #[test]
    fn missing_name_resolves_to_none() {
        let mirror = vec![ingredient(1, "Salt")];
        assert_eq!(ingredient_id_by_name(&mirror, "Sugar"), None);
        assert_eq!(ingredient_id_by_name(&[], "Salt"), None);
    }

    #[test]
    fn partial_match_does_not_resolve() {
        let mirror = vec![ingredient(1, "Sea Salt")];
        assert_eq!(ingredient_id_by_name(&mirror, "Salt"), None);
    }

    // Duplicate names are ambiguous by design: first in listing order wins.
    #[test]
    fn duplicate_names_resolve_to_first() {
        let mirror = vec![
            ingredient(10, "Salt"),
            ingredient(11, "Salt"),
            ingredient(12, "Pepper"),
        ];
        assert_eq!(ingredient_id_by_name(&mirror, "Salt"), Some(10));
    }

    #[test]
    fn recipe_resolution_is_exact_and_first_wins() {
        let recipes = vec![
            recipe(1, "Stew"),
            recipe(2, "Beef Stew"),
            recipe(3, "Stew"),
        ];
        assert_eq!(recipe_by_name(&recipes, "Stew").map(|r| r.id), Some(1));
        assert_eq!(recipe_by_name(&recipes, "Beef Stew").map(|r| r.id), Some(2));
        assert!(recipe_by_name(&recipes, "Soup").is_none());
    }
}
