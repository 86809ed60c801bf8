//! # HTTP transport seam
//!
//! [`ApiClient`](crate::ApiClient) builds plain [`HttpRequest`] values and hands
//! them to an [`HttpTransport`]. The production transport is
//! [`ReqwestTransport`], which runs on both native targets and wasm (where
//! reqwest drives the browser's `fetch`). Tests swap in
//! [`MockTransport`](crate::mock::MockTransport).
//!
//! The trait returns plain `impl Future` with no `Send` bound because browser
//! futures are not `Send`.

use crate::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully built request, independent of any HTTP library.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn with_json(mut self, body: String) -> Self {
        self.body = Some(body);
        self.with_header("Content-Type", "application/json")
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Path component of the URL (`/api/foods` for `http://host:3000/api/foods`).
    pub fn path(&self) -> &str {
        let rest = match self.url.split_once("://") {
            Some((_, rest)) => rest,
            None => return &self.url,
        };
        match rest.find('/') {
            Some(i) => &rest[i..],
            None => "/",
        }
    }
}

/// Status and text body of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can execute an [`HttpRequest`].
pub trait HttpTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>>;
}

/// Transport backed by a shared [`reqwest::Client`].
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_extraction() {
        let request = HttpRequest::new(Method::Get, "http://localhost:3000/api/foods");
        assert_eq!(request.path(), "/api/foods");
        assert_eq!(HttpRequest::new(Method::Get, "https://example.com").path(), "/");
        assert_eq!(HttpRequest::new(Method::Get, "/delete/42").path(), "/delete/42");
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = HttpRequest::new(Method::Post, "http://h/api/food")
            .with_header("Authorization", "Bearer abc")
            .with_json("{}".to_string());
        assert_eq!(request.header("authorization"), Some("Bearer abc"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_success_range() {
        assert!(HttpResponse { status: 204, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 301, body: String::new() }.is_success());
        assert!(!HttpResponse { status: 401, body: String::new() }.is_success());
    }
}
