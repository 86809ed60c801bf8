//! # Recipe API client
//!
//! One method per backend endpoint. Every method builds an [`HttpRequest`],
//! sends it through the configured [`HttpTransport`] and maps the outcome:
//!
//! - transport failure → [`ApiError::Transport`]
//! - any non-2xx status → [`ApiError::Status`] carrying the body text verbatim
//! - 2xx with an unexpected body → [`ApiError::Decode`]
//!
//! Read endpoints attach the credential when one is given. Write endpoints
//! require it and fail with [`ApiError::MissingCredential`] without touching
//! the network otherwise.

use serde::de::DeserializeOwned;
use store::{ClientConfig, Credential};

use crate::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::models::{NewRecipe, Recipe, RecipeList, RenameRecipe};
use crate::transport::{HttpRequest, HttpTransport, Method, ReqwestTransport};
use crate::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl ApiClient<ReqwestTransport> {
    /// Client for the backend named in `config`.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(ReqwestTransport::new(), config.api.base_url.clone())
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `POST /api/register`, returning the issued credential.
    pub async fn register(&self, form: &RegisterRequest) -> Result<Credential, ApiError> {
        let body = serde_json::to_string(form)?;
        let text = self
            .execute(Method::Post, "/api/register", None, Some(body))
            .await?;
        decode::<TokenResponse>(&text).map(|r| Credential::new(r.token))
    }

    /// `POST /api/login`, returning the issued credential.
    pub async fn login(&self, form: &LoginRequest) -> Result<Credential, ApiError> {
        let body = serde_json::to_string(form)?;
        let text = self
            .execute(Method::Post, "/api/login", None, Some(body))
            .await?;
        decode::<TokenResponse>(&text).map(|r| Credential::new(r.token))
    }

    /// `GET /api/foods`. With a credential the backend scopes the list to its owner.
    pub async fn list_recipes(
        &self,
        credential: Option<&Credential>,
    ) -> Result<Vec<Recipe>, ApiError> {
        let text = self
            .execute(Method::Get, "/api/foods", credential, None)
            .await?;
        decode::<RecipeList>(&text).map(RecipeList::into_vec)
    }

    /// `GET /api/food/:id`.
    pub async fn get_recipe(
        &self,
        id: &str,
        credential: Option<&Credential>,
    ) -> Result<Recipe, ApiError> {
        let text = self
            .execute(Method::Get, &format!("/api/food/{id}"), credential, None)
            .await?;
        decode(&text)
    }

    /// `POST /api/food`. The created recipe in the response is not used.
    pub async fn create_recipe(
        &self,
        credential: Option<&Credential>,
        recipe: &NewRecipe,
    ) -> Result<(), ApiError> {
        let credential = require(credential)?;
        let body = serde_json::to_string(recipe)?;
        self.execute(Method::Post, "/api/food", Some(credential), Some(body))
            .await?;
        Ok(())
    }

    /// `PUT /update`. Only the name can be changed through this endpoint.
    pub async fn rename_recipe(
        &self,
        credential: Option<&Credential>,
        update: &RenameRecipe,
    ) -> Result<(), ApiError> {
        let credential = require(credential)?;
        if update.id.is_empty() {
            return Err(ApiError::MissingId);
        }
        let body = serde_json::to_string(update)?;
        self.execute(Method::Put, "/update", Some(credential), Some(body))
            .await?;
        Ok(())
    }

    /// `DELETE /delete/:id`. The response body is ignored.
    pub async fn delete_recipe(
        &self,
        credential: Option<&Credential>,
        id: &str,
    ) -> Result<(), ApiError> {
        let credential = require(credential)?;
        self.execute(Method::Delete, &format!("/delete/{id}"), Some(credential), None)
            .await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        credential: Option<&Credential>,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let mut request = HttpRequest::new(method, format!("{}{path}", self.base_url));
        if let Some(credential) = credential {
            request = request.with_header("Authorization", credential.bearer());
        }
        if let Some(body) = body {
            request = request.with_json(body);
        }

        tracing::debug!(
            method = method.as_str(),
            path,
            authenticated = credential.is_some(),
            "api request"
        );

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            tracing::debug!(status = response.status, path, "api request rejected");
            return Err(ApiError::Status {
                status: response.status,
                message: response.body,
            });
        }
        Ok(response.body)
    }
}

fn require(credential: Option<&Credential>) -> Result<&Credential, ApiError> {
    credential.ok_or(ApiError::MissingCredential)
}

fn decode<D: DeserializeOwned>(text: &str) -> Result<D, ApiError> {
    Ok(serde_json::from_str(text)?)
}
