//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware chrome read `AuthState` to coordinate login
//! redirects and identity-dependent rendering. `AuthSession` owns the
//! state transitions: one initial revalidation decides the exit from the
//! loading window, login and logout move between the settled states, and
//! the session-expiry coordinator clears the user on any observed 401.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net;
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{LoginResponse, User};
use crate::state::session::SessionStore;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True only during the initial revalidation window; flips to false
    /// exactly once and never back.
    pub loading: bool,
    /// Most recent auth failure, for inline display.
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Context-provided handle over the auth state machine.
///
/// Cloneable; all clones share the same state signal and session store.
#[derive(Clone)]
pub struct AuthSession {
    pub state: RwSignal<AuthState>,
    http: HttpClient,
}

/// Identifiers containing an `@` are routed to the email-login endpoint;
/// anything else is treated as a username.
pub(crate) fn is_email(identifier: &str) -> bool {
    identifier.contains('@')
}

impl AuthSession {
    pub fn new(http: HttpClient) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            http,
        }
    }

    fn session(&self) -> &SessionStore {
        self.http.session()
    }

    /// Revalidate a stored session at startup. Runs once per process
    /// lifetime and fully determines the exit from the loading window.
    ///
    /// No stored token: settle unauthenticated without touching the
    /// network. Stored token: fetch the identity; failure evicts the
    /// token so the next load starts clean.
    pub async fn initialize(&self) {
        if self.session().get().is_none() {
            self.state.update(|s| s.loading = false);
            return;
        }
        let fetched = net::auth::current_user(&self.http).await;
        self.apply_revalidation(fetched);
    }

    fn apply_revalidation(&self, fetched: Result<User, ApiError>) {
        match fetched {
            Ok(user) => self.state.update(|s| {
                s.user = Some(user);
                s.loading = false;
                s.error = None;
            }),
            Err(err) => {
                let message = if err.is_unauthorized() {
                    "Session expired. Please sign in again.".to_owned()
                } else {
                    err.to_string()
                };
                self.session().clear();
                self.state.update(|s| {
                    s.user = None;
                    s.loading = false;
                    s.error = Some(message);
                });
            }
        }
    }

    /// Authenticate against the remote auth service.
    ///
    /// On failure the error is recorded and re-raised so the calling page
    /// can display it. On success both the token and the user are settled
    /// before this returns.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<(), ApiError> {
        let response = if is_email(identifier) {
            net::auth::login_with_email(&self.http, identifier, password).await
        } else {
            net::auth::login_with_username(&self.http, identifier, password).await
        };
        match response {
            Ok(body) => self.accept_login(body).await,
            Err(err) => {
                self.state.update(|s| {
                    s.user = None;
                    s.error = Some(err.to_string());
                });
                Err(err)
            }
        }
    }

    /// Normalize and apply a successful login response.
    ///
    /// A response with no token under either known field name is a login
    /// failure: an authenticated user with no stored token could never
    /// make an authenticated request. When the response omits the profile, a
    /// follow-up identity fetch fills it in; that fetch failing leaves
    /// the token stored with no confirmed profile until the next reload
    /// revalidates. The failure is logged, not rolled back.
    async fn accept_login(&self, body: LoginResponse) -> Result<(), ApiError> {
        let Some(token) = body.session_token() else {
            let err = ApiError::Network("login response carried no session token".to_owned());
            self.state.update(|s| {
                s.user = None;
                s.error = Some(err.to_string());
            });
            return Err(err);
        };
        self.session().set(token);

        if let Some(user) = body.user {
            self.state.update(|s| {
                s.user = Some(user);
                s.error = None;
            });
            return Ok(());
        }
        match net::auth::current_user(&self.http).await {
            Ok(user) => self.state.update(|s| {
                s.user = Some(user);
                s.error = None;
            }),
            Err(err) => {
                leptos::logging::warn!("identity fetch after login failed: {err}");
            }
        }
        Ok(())
    }

    /// End the session. The remote call goes first (it still needs the
    /// bearer header); local cleanup is unconditional regardless of its
    /// outcome.
    pub async fn logout(&self) {
        if let Err(err) = net::auth::logout(&self.http).await {
            leptos::logging::warn!("logout request failed: {err}");
        }
        self.session().clear();
        self.state.update(|s| s.user = None);
    }
}
