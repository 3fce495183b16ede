//! UI Components
//!
//! One file per page controller plus the shared pieces.

mod ingredient_list;
mod ingredient_page;
mod login_form;
mod logout_button;
mod recipe_forms;
mod recipe_list;
mod recipe_page;
mod register_form;

pub use ingredient_list::IngredientList;
pub use ingredient_page::IngredientPage;
pub use login_form::LoginPage;
pub use logout_button::LogoutButton;
pub use recipe_list::RecipeList;
pub use recipe_page::RecipePage;
pub use register_form::RegisterPage;
