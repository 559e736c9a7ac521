//! Top navigation bar with the current user's identity and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthSession;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let state = auth.state;
    let navigate = use_navigate();

    let username = move || {
        state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_else(|| "User".to_owned())
    };
    let email = move || state.get().user.map(|u| u.email).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                auth.logout().await;
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&auth, &navigate);
        }
    };

    view! {
        <header class="navbar">
            <a href="/dashboard" class="navbar__brand">
                "CRM Desk"
            </a>
            <span class="navbar__spacer"></span>
            <span class="navbar__user">
                <span class="navbar__user-name">{username}</span>
                <span class="navbar__user-email">{email}</span>
            </span>
            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
