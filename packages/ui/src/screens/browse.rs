use api::{ApiClient, HttpTransport, Recipe};
use store::Credential;

use super::{Destination, EditSource, LoadState};

/// Every recipe on the service. Fetched fresh on each mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowseAll {
    pub recipes: LoadState<Vec<Recipe>>,
}

impl BrowseAll {
    pub async fn load<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        credential: Option<&Credential>,
    ) {
        self.recipes.start();
        let result = api.list_recipes(credential).await;
        self.recipes.resolve(result, "Could not load recipes");
    }
}

/// The signed-in user's recipes, with delete and edit actions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MyRecipes {
    pub recipes: LoadState<Vec<Recipe>>,
}

impl MyRecipes {
    /// Fetch the caller's recipes. Without a credential nothing is requested.
    pub async fn load<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        credential: Option<&Credential>,
    ) {
        let Some(credential) = credential else {
            self.recipes = LoadState::Idle;
            return;
        };
        self.recipes.start();
        let result = api.list_recipes(Some(credential)).await;
        self.recipes.resolve(result, "Could not load recipes");
    }

    /// Delete `id`, then reload the whole list whatever the delete returned.
    ///
    /// Confirmation happens in the view before this is called.
    pub async fn delete<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        credential: Option<&Credential>,
        id: &str,
    ) {
        if let Err(e) = api.delete_recipe(credential, id).await {
            tracing::warn!("Delete of recipe {id} failed: {e}");
        }
        self.load(api, credential).await;
    }

    /// Open the editor for `recipe`, handing the item over so the edit screen
    /// doesn't fetch it again.
    pub fn edit(recipe: &Recipe) -> (Destination, EditSource) {
        (
            Destination::Edit {
                id: recipe.id.clone(),
            },
            EditSource::Inline(recipe.clone()),
        )
    }
}
