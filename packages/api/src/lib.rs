//! # API crate — typed client for the RecipeFeed backend
//!
//! Everything the screens need to talk to the recipe service lives here. The
//! crate knows nothing about Dioxus; it is driven from the `ui` screen state
//! machines and tested natively against [`mock::MockTransport`].
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Login/registration request bodies and the `{token}` response |
//! | [`models`] | — | [`Recipe`], its [`Owner`], list/create/rename payloads |
//! | [`transport`] | — | [`HttpTransport`] seam and the `reqwest` implementation |
//! | [`mock`] | `mock` / tests | Recording transport answering from a route table |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | [`ApiClient`] method |
//! |--------|------|------|----------------------|
//! | POST | `/api/register` | none | `register` |
//! | POST | `/api/login` | none | `login` |
//! | GET | `/api/foods` | optional | `list_recipes` |
//! | GET | `/api/food/:id` | optional | `get_recipe` |
//! | POST | `/api/food` | bearer | `create_recipe` |
//! | PUT | `/update` | bearer | `rename_recipe` |
//! | DELETE | `/delete/:id` | bearer | `delete_recipe` |

pub mod auth;
mod client;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod models;
pub mod transport;

pub use auth::{LoginRequest, RegisterRequest, TokenResponse};
pub use client::ApiClient;
pub use error::ApiError;
pub use models::{NewRecipe, Owner, Recipe, RecipeList, RenameRecipe};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};

pub use store::Credential;
