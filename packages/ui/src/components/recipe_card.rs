use api::Recipe;
use dioxus::prelude::*;

use super::DeleteConfirmButton;

/// Responsive grid the recipe cards flow into.
#[component]
pub fn RecipeGrid(children: Element) -> Element {
    rsx! {
        div { class: "recipe-grid", {children} }
    }
}

/// One recipe: name, description and author when known.
///
/// Edit and delete buttons appear only when the matching handler is given.
#[component]
pub fn RecipeCard(
    recipe: Recipe,
    on_edit: Option<EventHandler<Recipe>>,
    on_delete: Option<EventHandler<String>>,
) -> Element {
    let edit_target = recipe.clone();
    let delete_id = recipe.id.clone();

    rsx! {
        div {
            class: "card recipe-card",
            h3 { "{recipe.name}" }
            p { class: "recipe-description", "{recipe.description}" }
            if let Some(author) = recipe.author() {
                p { class: "small-text", "by {author}" }
            }
            div {
                class: "card-footer",
                if let Some(on_edit) = on_edit {
                    button {
                        class: "btn btn-warn",
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        "Edit"
                    }
                }
                if let Some(on_delete) = on_delete {
                    DeleteConfirmButton {
                        on_confirm: move |_| on_delete.call(delete_id.clone()),
                    }
                }
            }
        }
    }
}
