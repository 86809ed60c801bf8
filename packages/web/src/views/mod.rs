mod nav_bar;
pub use nav_bar::NavBar;

mod browse;
pub use browse::{AllRecipes, Home, MyRecipes};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod add_recipe;
pub use add_recipe::AddRecipe;

mod edit_recipe;
pub use edit_recipe::EditRecipe;
