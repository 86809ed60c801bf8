mod delete_confirm_button;
mod error_message;
mod recipe_card;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_message::ErrorMessage;
pub use recipe_card::{RecipeCard, RecipeGrid};
