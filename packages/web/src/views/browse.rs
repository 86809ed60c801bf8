use api::Recipe;
use dioxus::prelude::*;
use ui::components::{ErrorMessage, RecipeCard, RecipeGrid};
use ui::screens::{BrowseAll, EditSource, MyRecipes as MyRecipesScreen};
use ui::{use_api, use_edit_handoff, use_session};

use crate::Route;

/// `/` shows the same thing as `/all`.
#[component]
pub fn Home() -> Element {
    rsx! {
        AllRecipes {}
    }
}

#[component]
pub fn AllRecipes() -> Element {
    let api = use_api();
    let session = use_session();
    let mut screen = use_signal(BrowseAll::default);

    // Fetch on mount and again whenever the session changes
    use_effect(move || {
        let credential = session.read().get().cloned();
        let api = api.clone();
        spawn(async move {
            screen.write().recipes.start();
            let mut next = BrowseAll::default();
            next.load(&api, credential.as_ref()).await;
            screen.set(next);
        });
    });

    let recipes = screen.read().recipes.clone();

    rsx! {
        div {
            class: "container",
            div {
                class: "page-header",
                h2 { "All Recipes" }
                p { class: "small-text", "Browse recipes from all creators" }
            }

            if recipes.is_loading() {
                p { class: "small-text", "Loading recipes..." }
            }

            RecipeGrid {
                for recipe in recipes.value().cloned().unwrap_or_default() {
                    RecipeCard { key: "{recipe.id}", recipe: recipe.clone() }
                }
            }

            ErrorMessage { message: recipes.error().map(str::to_string) }
        }
    }
}

#[component]
pub fn MyRecipes() -> Element {
    let api = use_api();
    let session = use_session();
    let mut handoff = use_edit_handoff();
    let nav = use_navigator();
    let mut screen = use_signal(MyRecipesScreen::default);

    let load_api = api.clone();
    use_effect(move || {
        let credential = session.read().get().cloned();
        let api = load_api.clone();
        spawn(async move {
            if credential.is_some() {
                screen.write().recipes.start();
            }
            let mut next = MyRecipesScreen::default();
            next.load(&api, credential.as_ref()).await;
            screen.set(next);
        });
    });

    let on_delete = use_callback(move |id: String| {
        let credential = session.peek().get().cloned();
        let api = api.clone();
        spawn(async move {
            let mut next = screen();
            next.delete(&api, credential.as_ref(), &id).await;
            screen.set(next);
        });
    });

    let on_edit = use_callback(move |recipe: Recipe| {
        let (destination, source) = MyRecipesScreen::edit(&recipe);
        if let EditSource::Inline(item) = source {
            handoff.set(Some(item));
        }
        nav.push(Route::from(destination));
    });

    let signed_in = session.read().is_authenticated();
    let recipes = screen.read().recipes.clone();

    rsx! {
        div {
            class: "container",
            h2 { "My Recipes" }

            if !signed_in {
                p {
                    class: "small-text",
                    "Sign in to see your recipes. "
                    Link { to: Route::Login {}, "Login" }
                }
            }

            ErrorMessage { message: recipes.error().map(str::to_string) }

            if recipes.is_loading() {
                p { class: "small-text", "Loading recipes..." }
            }

            RecipeGrid {
                for recipe in recipes.value().cloned().unwrap_or_default() {
                    RecipeCard {
                        key: "{recipe.id}",
                        recipe: recipe.clone(),
                        on_edit: on_edit,
                        on_delete: on_delete,
                    }
                }
            }
        }
    }
}
