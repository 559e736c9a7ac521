use super::*;

use crate::net::types::User;

fn settled(user: Option<User>) -> AuthState {
    AuthState {
        user,
        loading: false,
        error: None,
    }
}

#[test]
fn guard_waits_while_loading() {
    // Loading must block rather than default to allow or deny.
    assert_eq!(guard_outcome(&AuthState::default()), GuardOutcome::Wait);
}

#[test]
fn guard_allows_authenticated_sessions() {
    let user = User {
        username: "a".to_owned(),
        email: "a@b.com".to_owned(),
        role: String::new(),
    };
    assert_eq!(guard_outcome(&settled(Some(user))), GuardOutcome::Allow);
}

#[test]
fn guard_redirects_once_settled_unauthenticated() {
    assert_eq!(guard_outcome(&settled(None)), GuardOutcome::RedirectToLogin);
}
