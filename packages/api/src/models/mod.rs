//! Data models exchanged with the recipe API.

use serde::Deserialize;

mod recipe;
mod user;

pub use recipe::{NewRecipe, Recipe, RecipeList, RenameRecipe};
pub use user::Owner;

/// Identifier as the backend sends it: a string or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}
