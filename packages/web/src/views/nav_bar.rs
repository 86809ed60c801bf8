use dioxus::prelude::*;
use ui::{use_session, LogoutButton};

use crate::Route;

/// Top bar wrapping every route. Links depend on whether a session exists.
#[component]
pub fn NavBar() -> Element {
    let session = use_session();
    let signed_in = session.read().is_authenticated();

    rsx! {
        nav {
            class: "navbar",
            Link { class: "nav-brand", to: Route::Home {}, "RecipeFeed" }
            Link { class: "nav-link", to: Route::AllRecipes {}, "All Recipes" }
            if signed_in {
                Link { class: "nav-link", to: Route::MyRecipes {}, "My Recipes" }
                Link { class: "nav-link", to: Route::AddRecipe {}, "Add Recipe" }
                div {
                    class: "nav-actions",
                    LogoutButton { class: "btn btn-danger" }
                }
            } else {
                div {
                    class: "nav-actions",
                    Link { class: "btn btn-primary", to: Route::Login {}, "Login" }
                    Link { class: "btn btn-accent", to: Route::Register {}, "Register" }
                }
            }
        }
        Outlet::<Route> {}
    }
}
