use api::{ApiClient, ApiError, HttpTransport, NewRecipe, Recipe, RenameRecipe};
use store::Credential;

use super::{Destination, LoadState};

/// New recipe form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateForm {
    pub name: String,
    pub description: String,
    pub submitting: bool,
    pub message: Option<String>,
}

impl CreateForm {
    /// Post the recipe; clears the form and heads to "my recipes" on success.
    pub async fn submit<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        credential: Option<&Credential>,
    ) -> Option<Destination> {
        self.submitting = true;
        let recipe = NewRecipe {
            name: self.name.clone(),
            description: self.description.clone(),
        };
        let result = api.create_recipe(credential, &recipe).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.name.clear();
                self.description.clear();
                self.message = None;
                Some(Destination::MyRecipes)
            }
            Err(e) => {
                self.message = Some(e.message_or("Could not add recipe"));
                None
            }
        }
    }
}

/// How the edit screen obtains its recipe.
#[derive(Clone, Debug, PartialEq)]
pub enum EditSource {
    /// Handed over by the screen that navigated here.
    Inline(Recipe),
    /// Only the id is known; fetch it.
    Fetch(String),
}

impl EditSource {
    /// Use the handed-over item when it is the one `id` names, else fetch.
    pub fn resolve(id: &str, handed_over: Option<Recipe>) -> Self {
        match handed_over {
            Some(recipe) if recipe.id == id => Self::Inline(recipe),
            _ => Self::Fetch(id.to_string()),
        }
    }
}

/// Edit form for one recipe.
///
/// The form collects a description, but the update endpoint only accepts a new
/// name, so the description is never sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditForm {
    pub id: String,
    pub recipe: LoadState<Recipe>,
    pub name: String,
    pub description: String,
    pub submitting: bool,
    pub message: Option<String>,
}

impl EditForm {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Fresh form for `id`, filled from the handed-over recipe when it is the
    /// one `id` names, fetched otherwise.
    pub async fn open<T: HttpTransport>(
        api: &ApiClient<T>,
        credential: Option<&Credential>,
        id: &str,
        handed_over: Option<Recipe>,
    ) -> Self {
        let mut form = Self::new(id);
        form.load(api, credential, EditSource::resolve(id, handed_over)).await;
        form
    }

    pub async fn load<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        credential: Option<&Credential>,
        source: EditSource,
    ) {
        match source {
            EditSource::Inline(recipe) => self.fill(recipe),
            EditSource::Fetch(id) => {
                if id.is_empty() {
                    return;
                }
                self.recipe.start();
                match api.get_recipe(&id, credential).await {
                    Ok(recipe) => self.fill(recipe),
                    Err(e) => {
                        tracing::error!("Could not load recipe: {e}");
                        self.recipe.resolve(Err(e), "Could not load recipe");
                    }
                }
            }
        }
    }

    fn fill(&mut self, recipe: Recipe) {
        self.name = recipe.name.clone();
        self.description = recipe.description.clone();
        self.recipe = LoadState::Loaded(recipe);
    }

    /// Still waiting for the recipe and nothing to show instead.
    pub fn is_loading(&self) -> bool {
        matches!(self.recipe, LoadState::Idle | LoadState::Loading) && self.message.is_none()
    }

    /// Message to display: a submit failure, else a load failure.
    pub fn error(&self) -> Option<&str> {
        self.message.as_deref().or(self.recipe.error())
    }

    /// Send the rename; heads to "my recipes" on success.
    pub async fn submit<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        credential: Option<&Credential>,
    ) -> Option<Destination> {
        if self.id.is_empty() {
            self.message = Some(ApiError::MissingId.to_string());
            return None;
        }

        self.submitting = true;
        let update = RenameRecipe {
            id: self.id.clone(),
            newfoodname: self.name.clone(),
        };
        let result = api.rename_recipe(credential, &update).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.message = None;
                Some(Destination::MyRecipes)
            }
            Err(e) => {
                self.message = Some(e.message_or("Update failed"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::client;
    use crate::screens::MyRecipes;
    use api::Method;

    fn soup() -> Recipe {
        Recipe {
            id: "42".to_string(),
            name: "Soup".to_string(),
            description: "Hot".to_string(),
            user: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_my_recipes_fetches() {
        let (api, mock) = client();
        mock.respond(Method::Post, "/api/food", 201, r#"{"_id":"43","name":"Soup"}"#);
        mock.respond(
            Method::Get,
            "/api/foods",
            200,
            r#"[{"_id":"43","foodname":"Soup","description":"Hot"}]"#,
        );
        let credential = Credential::new("abc");

        let mut form = CreateForm {
            name: "Soup".to_string(),
            description: "Hot".to_string(),
            ..Default::default()
        };
        let destination = form.submit(&api, Some(&credential)).await;

        assert_eq!(destination, Some(Destination::MyRecipes));
        assert_eq!(form, CreateForm::default());
        let sent = mock.requests_to(Method::Post, "/api/food");
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Soup", "description": "Hot"}));
        assert_eq!(sent[0].header("Authorization"), Some("Bearer abc"));

        // Landing on "my recipes" mounts a fresh screen, which fetches.
        let mut mine = MyRecipes::default();
        mine.load(&api, Some(&credential)).await;
        assert_eq!(mock.requests_to(Method::Get, "/api/foods").len(), 1);
        assert_eq!(mine.recipes.value().unwrap()[0].name, "Soup");
    }

    #[tokio::test]
    async fn test_create_failure_keeps_fields() {
        let (api, mock) = client();
        mock.respond(Method::Post, "/api/food", 400, "name is required");
        let credential = Credential::new("abc");

        let mut form = CreateForm {
            description: "Hot".to_string(),
            ..Default::default()
        };
        assert_eq!(form.submit(&api, Some(&credential)).await, None);
        assert_eq!(form.message.as_deref(), Some("name is required"));
        assert_eq!(form.description, "Hot");
    }

    #[test]
    fn test_resolve_source() {
        assert_eq!(EditSource::resolve("42", Some(soup())), EditSource::Inline(soup()));
        assert_eq!(EditSource::resolve("42", None), EditSource::Fetch("42".to_string()));
        assert_eq!(EditSource::resolve("7", Some(soup())), EditSource::Fetch("7".to_string()));
    }

    #[tokio::test]
    async fn test_inline_source_skips_fetch() {
        let (api, mock) = client();

        let mut form = EditForm::new("42");
        assert!(form.is_loading());
        form.load(&api, None, EditSource::Inline(soup())).await;

        assert!(!form.is_loading());
        assert_eq!(form.name, "Soup");
        assert_eq!(form.description, "Hot");
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_source_loads_by_id() {
        let (api, mock) = client();
        mock.respond(
            Method::Get,
            "/api/food/42",
            200,
            r#"{"_id":"42","name":"Soup","description":"Hot"}"#,
        );
        let credential = Credential::new("abc");

        let mut form = EditForm::new("42");
        form.load(&api, Some(&credential), EditSource::Fetch("42".to_string())).await;

        assert_eq!(form.recipe.value(), Some(&soup()));
        assert_eq!(form.name, "Soup");
        assert_eq!(mock.requests()[0].header("Authorization"), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_open_follows_new_id() {
        let (api, mock) = client();
        mock.respond(
            Method::Get,
            "/api/food/7",
            200,
            r#"{"_id":"7","name":"Stew","description":"Thick"}"#,
        );

        let first = EditForm::open(&api, None, "42", Some(soup())).await;
        assert_eq!(first.name, "Soup");
        assert!(mock.requests().is_empty());

        // Same screen, new route id: the stale hand-over is ignored.
        let second = EditForm::open(&api, None, "7", Some(soup())).await;
        assert_eq!(second.id, "7");
        assert_eq!(second.name, "Stew");
        assert_eq!(second.description, "Thick");
        assert_eq!(mock.requests_to(Method::Get, "/api/food/7").len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_message() {
        let (api, mock) = client();
        mock.respond(Method::Get, "/api/food/42", 404, "");

        let mut form = EditForm::new("42");
        form.load(&api, None, EditSource::Fetch("42".to_string())).await;

        assert!(!form.is_loading());
        assert_eq!(form.error(), Some("Could not load recipe"));
    }

    #[tokio::test]
    async fn test_submit_sends_only_id_and_name() {
        let (api, mock) = client();
        mock.respond(Method::Put, "/update", 200, r#"{"_id":"42","name":"Broth"}"#);
        let credential = Credential::new("abc");

        let mut form = EditForm::new("42");
        form.load(&api, Some(&credential), EditSource::Inline(soup())).await;
        form.name = "Broth".to_string();
        form.description = "Now with noodles".to_string();
        let destination = form.submit(&api, Some(&credential)).await;

        assert_eq!(destination, Some(Destination::MyRecipes));
        let sent = mock.requests_to(Method::Put, "/update");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header("Authorization"), Some("Bearer abc"));
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"id": "42", "newfoodname": "Broth"}));
        assert!(!sent[0].body.as_deref().unwrap().contains("noodles"));
    }

    #[tokio::test]
    async fn test_submit_without_id() {
        let (api, mock) = client();
        let credential = Credential::new("abc");

        let mut form = EditForm::new("");
        form.name = "Broth".to_string();

        assert_eq!(form.submit(&api, Some(&credential)).await, None);
        assert_eq!(form.error(), Some("Missing recipe id"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_message() {
        let (api, mock) = client();
        mock.respond(Method::Put, "/update", 403, "Not your recipe");
        let credential = Credential::new("abc");

        let mut form = EditForm::new("42");
        form.load(&api, Some(&credential), EditSource::Inline(soup())).await;

        assert_eq!(form.submit(&api, Some(&credential)).await, None);
        assert_eq!(form.error(), Some("Not your recipe"));
    }
}
