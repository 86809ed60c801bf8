//! # Recording HTTP transport for tests
//!
//! [`MockTransport`] answers requests from a per-route table keyed by method
//! and URL path, and records every request it sees. Replies are sticky: a route
//! keeps answering the same way until it is reconfigured. Unknown routes get a
//! `404` with body `"Not Found"`.
//!
//! Clones share state, so a test can hand one clone to an
//! [`ApiClient`](crate::ApiClient) and inspect traffic through another.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::ApiError;

#[derive(Clone, Debug)]
enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

#[derive(Debug, Default)]
struct MockState {
    routes: HashMap<(Method, String), Reply>,
    requests: Vec<HttpRequest>,
}

#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer `method path` with `status` and `body`.
    pub fn respond(
        &self,
        method: Method,
        path: &str,
        status: u16,
        body: impl Into<String>,
    ) -> &Self {
        self.lock().routes.insert(
            (method, path.to_string()),
            Reply::Respond(HttpResponse {
                status,
                body: body.into(),
            }),
        );
        self
    }

    /// Make `method path` fail at the transport level.
    pub fn fail(&self, method: Method, path: &str, message: impl Into<String>) -> &Self {
        self.lock()
            .routes
            .insert((method, path.to_string()), Reply::Fail(message.into()));
        self
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    /// Requests seen for one route.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path() == path)
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.lock();
        let key = (request.method, request.path().to_string());
        let reply = state.routes.get(&key).cloned();
        state.requests.push(request);

        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(message)) => Err(ApiError::Transport(message)),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}
