//! Registration page for new portal accounts.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net;
use crate::net::http::HttpClient;
use crate::net::types::RegisterRequest;

/// Roles the auth service accepts, in the order the form offers them.
const ROLES: [&str; 2] = ["CUSTOMER_REPRESENTATIVE", "ADMIN"];

/// Client-side validation matching the auth service's rules.
fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
    role: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role: role.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(ROLES[0].to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_registration(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
            &role.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let http = http.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match net::auth::register(&http, &request).await {
                    Ok(()) => navigate("/login?registered=1", NavigateOptions::default()),
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&http, &navigate, request);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CRM Desk"</h1>
                <p class="login-card__subtitle">"Create a new account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {ROLES
                            .into_iter()
                            .map(|r| view! { <option value=r selected=move || role.get() == r>{r}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
