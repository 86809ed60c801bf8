//! # Recipe model
//!
//! The backend is not consistent about field names: list responses carry the
//! title as `foodname`, single-item responses as `name`, and identifiers come
//! as `_id`. [`Recipe`] deserializes through a raw shape that accepts every
//! spelling so screens only ever see one.
//!
//! | Wire field | Maps to |
//! |------------|---------|
//! | `_id` / `id` (string or number) | [`Recipe::id`] |
//! | `name` / `foodname` | [`Recipe::name`] |
//! | `description` | [`Recipe::description`] |
//! | `user` (object or bare owner id) | [`Recipe::user`] |
//!
//! [`RecipeList`] accepts either a bare array or `{ "items": [...] }`.

use serde::{Deserialize, Serialize};

use super::user::RawOwner;
use super::{Owner, RawId};

/// A recipe as shown by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawRecipe")]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub user: Option<Owner>,
}

impl Recipe {
    /// Author's display name, when the backend populated it.
    pub fn author(&self) -> Option<&str> {
        self.user.as_ref().and_then(Owner::display_name)
    }
}

#[derive(Deserialize)]
struct RawRecipe {
    #[serde(rename = "_id", default)]
    underscore_id: Option<RawId>,
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    foodname: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    user: Option<RawOwner>,
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        Self {
            id: raw.underscore_id.or(raw.id).map(String::from).unwrap_or_default(),
            name: raw.name.or(raw.foodname).unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            user: raw.user.and_then(RawOwner::into_owner),
        }
    }
}

/// Body of `GET /api/foods`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RecipeList {
    Wrapped { items: Vec<Recipe> },
    Bare(Vec<Recipe>),
}

impl RecipeList {
    pub fn into_vec(self) -> Vec<Recipe> {
        match self {
            Self::Wrapped { items } => items,
            Self::Bare(items) => items,
        }
    }
}

/// Body of `POST /api/food`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
}

/// Body of `PUT /update`. The endpoint only renames; there is no description field.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RenameRecipe {
    pub id: String,
    pub newfoodname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_shape() {
        let json = r#"{"_id":"42","foodname":"Soup","description":"Hot",
            "user":{"_id":"u1","username":"ana"}}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "42");
        assert_eq!(recipe.name, "Soup");
        assert_eq!(recipe.description, "Hot");
        assert_eq!(recipe.author(), Some("ana"));
    }

    #[test]
    fn test_single_item_shape() {
        let json = r#"{"id":7,"name":"Stew"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "7");
        assert_eq!(recipe.name, "Stew");
        assert_eq!(recipe.description, "");
        assert!(recipe.user.is_none());
        assert_eq!(recipe.author(), None);
    }

    #[test]
    fn test_name_preferred_over_foodname() {
        let json = r#"{"_id":"1","name":"New","foodname":"Old"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.name, "New");
    }

    #[test]
    fn test_list_wrapped_and_bare() {
        let wrapped: RecipeList = serde_json::from_str(
            r#"{"items":[{"_id":"1","foodname":"A"},{"_id":"2","foodname":"B"}]}"#,
        )
        .unwrap();
        let bare: RecipeList = serde_json::from_str(r#"[{"_id":"1","foodname":"A"}]"#).unwrap();

        let wrapped = wrapped.into_vec();
        assert_eq!(wrapped.len(), 2);
        assert_eq!(wrapped[1].name, "B");
        assert_eq!(bare.into_vec()[0].id, "1");
    }

    #[test]
    fn test_unpopulated_owner_in_list() {
        let json = r#"[
            {"_id":"1","foodname":"A","user":"64f0c0ffee"},
            {"_id":"2","foodname":"B","user":{"_id":"u","id":"u","username":"ana"}},
            {"_id":"3","foodname":"C","user":null},
            {"_id":"4","foodname":"D","user":false}
        ]"#;
        let recipes = serde_json::from_str::<RecipeList>(json).unwrap().into_vec();

        assert_eq!(recipes.len(), 4);
        assert_eq!(recipes[0].user.as_ref().and_then(|u| u.id.as_deref()), Some("64f0c0ffee"));
        assert_eq!(recipes[0].author(), None);
        assert_eq!(recipes[1].author(), Some("ana"));
        assert_eq!(recipes[2].user, None);
        assert_eq!(recipes[3].user, None);
    }

    #[test]
    fn test_rename_body_has_no_description() {
        let body = serde_json::to_value(RenameRecipe {
            id: "42".to_string(),
            newfoodname: "Broth".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"id": "42", "newfoodname": "Broth"}));
    }
}
