//! Protected-routing gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected view sits under this guard. While the initial
//! revalidation is still running the guard holds: it must not default to
//! allow (protected content would flash for an expired session) or to
//! deny (a valid session would bounce through the login page on every
//! reload). Once settled it renders the subtree iff authenticated and
//! otherwise redirects to the login view.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::main_layout::MainLayout;
use crate::state::auth::{AuthSession, AuthState};

/// What the guard should do for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GuardOutcome {
    /// Revalidation still pending: render the placeholder, do not navigate.
    Wait,
    /// Session confirmed: render the protected subtree.
    Allow,
    /// Settled without a user: redirect to the login view.
    RedirectToLogin,
}

pub(crate) fn guard_outcome(state: &AuthState) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Wait
    } else if state.is_authenticated() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToLogin
    }
}

/// Route-level guard wrapping the authenticated application shell.
#[component]
pub fn RequireAuth() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let state = auth.state;
    let navigate = use_navigate();

    // Redirect only after auth has settled; never while loading.
    Effect::new(move || {
        if guard_outcome(&state.get()) == GuardOutcome::RedirectToLogin {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || guard_outcome(&state.get()) == GuardOutcome::Allow
            fallback=move || {
                view! {
                    <div class="page-gate">
                        <p>
                            {move || {
                                if state.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <MainLayout/>
        </Show>
    }
}
