use super::*;

use futures::executor::block_on;

use crate::net::http::DEFAULT_API_BASE;
use crate::state::session::SessionEvents;

fn session_with_store() -> (AuthSession, SessionStore) {
    let store = SessionStore::default();
    let http = HttpClient::new(DEFAULT_API_BASE, store.clone(), SessionEvents::new());
    (AuthSession::new(http), store)
}

fn sample_user(username: &str) -> User {
    User {
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        role: "CUSTOMER_REPRESENTATIVE".to_owned(),
    }
}

#[test]
fn default_state_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.error, None);
}

#[test]
fn is_email_routes_on_at_sign() {
    assert!(is_email("a@b.com"));
    assert!(!is_email("admin"));
}

#[test]
fn initialize_without_token_settles_unauthenticated_without_network() {
    let (auth, _store) = session_with_store();
    block_on(auth.initialize());

    let state = auth.state.get_untracked();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    // Any identity fetch would have recorded an error on native builds.
    assert_eq!(state.error, None);
}

#[test]
fn initialize_with_token_and_failing_fetch_clears_the_store() {
    let (auth, store) = session_with_store();
    store.set("stale");

    // Native builds have no HTTP stack, so the identity fetch fails.
    block_on(auth.initialize());

    let state = auth.state.get_untracked();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(state.error.is_some());
    assert_eq!(store.get(), None);
}

#[test]
fn accept_login_with_token_and_user_settles_authenticated() {
    let (auth, store) = session_with_store();
    let body = LoginResponse {
        token: Some("T".to_owned()),
        access_token: None,
        user: Some(sample_user("a")),
    };

    block_on(auth.accept_login(body)).expect("login accepted");

    assert_eq!(store.get(), Some("T".to_owned()));
    let state = auth.state.get_untracked();
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("a"));
    assert_eq!(state.error, None);
}

#[test]
fn accept_login_uses_access_token_fallback_and_keeps_it_on_profile_failure() {
    let (auth, store) = session_with_store();
    let body = LoginResponse {
        token: None,
        access_token: Some("A".to_owned()),
        user: None,
    };

    // The follow-up identity fetch fails on native builds; the token must
    // survive it (next reload revalidates).
    block_on(auth.accept_login(body)).expect("login accepted");

    assert_eq!(store.get(), Some("A".to_owned()));
    assert!(!auth.state.get_untracked().is_authenticated());
}

#[test]
fn accept_login_without_any_token_is_a_failure() {
    let (auth, store) = session_with_store();
    let body = LoginResponse {
        token: None,
        access_token: None,
        user: Some(sample_user("a")),
    };

    let result = block_on(auth.accept_login(body));

    assert!(result.is_err());
    assert_eq!(store.get(), None);
    let state = auth.state.get_untracked();
    assert!(!state.is_authenticated());
    assert!(state.error.is_some());
}

#[test]
fn login_failure_records_and_reraises_the_error() {
    let (auth, store) = session_with_store();

    // Native builds fail the request itself, exercising the error path.
    let result = block_on(auth.login("a@b.com", "pw"));

    assert!(result.is_err());
    assert_eq!(store.get(), None);
    let state = auth.state.get_untracked();
    assert!(!state.is_authenticated());
    assert!(state.error.is_some());
}

#[test]
fn logout_clears_local_state_even_when_the_remote_call_fails() {
    let (auth, store) = session_with_store();
    store.set("T");
    auth.state.update(|s| {
        s.loading = false;
        s.user = Some(sample_user("a"));
    });

    // The remote logout fails on native builds; cleanup must still run.
    block_on(auth.logout());

    assert_eq!(store.get(), None);
    assert!(!auth.state.get_untracked().is_authenticated());
}
