//! HTTP client wrapper for all remote CRM calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request the application makes goes through `HttpClient`, which
//! attaches the bearer token from the injected `SessionStore` and applies
//! the one cross-cutting failure policy in the system: an observed 401
//! evicts the session and raises the typed session-invalid signal before
//! the error reaches the caller. The wrapper never navigates; the
//! top-level coordinator in `app` owns that reaction.
//!
//! Browser builds (`csr`): real HTTP via `gloo-net`. Native builds: stubs
//! returning a network-kind error, so tests exercise failure paths.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::state::session::{SessionEvents, SessionStore};

/// Base address the remote services are deployed behind.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Injectable HTTP wrapper: base address + session store + event channel.
#[derive(Clone)]
pub struct HttpClient {
    base: String,
    session: SessionStore,
    events: SessionEvents,
}

impl HttpClient {
    pub fn new(base: impl Into<String>, session: SessionStore, events: SessionEvents) -> Self {
        Self {
            base: base.into(),
            session,
            events,
        }
    }

    /// The session store this client reads the bearer token from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// `GET path` decoding the JSON response body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self
                .authorize(gloo_net::http::Request::get(&self.url(path)))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::unavailable())
        }
    }

    /// `POST path` with a JSON body, decoding the JSON response body.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self
                .authorize(gloo_net::http::Request::post(&self.url(path)))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::unavailable())
        }
    }

    /// `POST path` with no body, ignoring any response body.
    pub async fn post_unit(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self
                .authorize(gloo_net::http::Request::post(&self.url(path)))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch_unit(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::unavailable())
        }
    }

    /// `POST path` with a JSON body, ignoring any response body (used by
    /// endpoints whose success payload the client has no use for).
    pub async fn post_json_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self
                .authorize(gloo_net::http::Request::post(&self.url(path)))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch_unit(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::unavailable())
        }
    }

    /// `PUT path` with a JSON body, decoding the JSON response body.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self
                .authorize(gloo_net::http::Request::put(&self.url(path)))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::unavailable())
        }
    }

    /// `PUT path` with no body, decoding the JSON response body (used by
    /// action endpoints like mark-paid and close that return the updated
    /// entity).
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self
                .authorize(gloo_net::http::Request::put(&self.url(path)))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::unavailable())
        }
    }

    /// `DELETE path`, ignoring any response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = self
                .authorize(gloo_net::http::Request::delete(&self.url(path)))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.dispatch_unit(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::unavailable())
        }
    }

    #[cfg(feature = "csr")]
    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    #[cfg(feature = "csr")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.session.get() {
            Some(token) => builder.header("Authorization", &bearer_value(&token)),
            None => builder,
        }
    }

    #[cfg(feature = "csr")]
    async fn dispatch<T: DeserializeOwned>(&self, request: gloo_net::http::Request) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Network(format!("invalid response body: {e}")));
        }
        Err(self.reject(response).await)
    }

    #[cfg(feature = "csr")]
    async fn dispatch_unit(&self, request: gloo_net::http::Request) -> Result<(), ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(());
        }
        Err(self.reject(response).await)
    }

    #[cfg(feature = "csr")]
    async fn reject(&self, response: gloo_net::http::Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        intercept_status(status, super::error::error_message(status, &body), &self.session, &self.events)
    }
}

/// Apply the cross-cutting 401 policy and produce the caller-facing error.
///
/// The eviction and the event notification happen before the error value
/// exists, so by the time any caller's error handler runs the store is
/// already empty and a retry cannot reuse the stale token.
pub(crate) fn intercept_status(
    status: u16,
    message: String,
    session: &SessionStore,
    events: &SessionEvents,
) -> ApiError {
    if status == 401 {
        session.clear();
        events.notify_expired();
    }
    ApiError::Http { status, message }
}

/// Authorization header value for a session token.
pub(crate) fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Join the base address and a path without doubling the separator.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
