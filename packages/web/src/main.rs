use dioxus::prelude::*;

use store::ClientConfig;
use ui::{Destination, SessionProvider};
use views::{AddRecipe, AllRecipes, EditRecipe, Home, Login, MyRecipes, NavBar, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/all")]
        AllRecipes {},
        #[route("/register")]
        Register {},
        #[route("/login")]
        Login {},
        #[route("/my")]
        MyRecipes {},
        #[route("/add")]
        AddRecipe {},
        #[route("/edit/:id")]
        EditRecipe { id: String },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::MyRecipes => Route::MyRecipes {},
            Destination::Edit { id } => Route::EditRecipe { id },
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BUNDLED_CONFIG: &str = include_str!("../recipefeed.toml");

// `dioxus::launch` installs the tracing subscriber (console on web).
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ClientConfig::load(BUNDLED_CONFIG);
        tracing::info!(api = %config.api.base_url, "RecipeFeed starting");
        config
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        SessionProvider {
            config: config,
            div {
                class: "app",
                Router::<Route> {}
            }
        }
    }
}
