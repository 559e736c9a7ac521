//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::route_guard::RequireAuth;
use crate::net::http::{DEFAULT_API_BASE, HttpClient};
use crate::pages::billing::BillingPage;
use crate::pages::customer_detail::CustomerDetailPage;
use crate::pages::customer_form::CustomerFormPage;
use crate::pages::customer_list::CustomerListPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::plan_detail::PlanDetailPage;
use crate::pages::plan_form::PlanFormPage;
use crate::pages::plan_list::PlanListPage;
use crate::pages::register::RegisterPage;
use crate::pages::support::SupportPage;
use crate::state::auth::AuthSession;
use crate::state::session::{SessionEvents, SessionStore};

/// Root application component.
///
/// Wires the session store, the HTTP client, and the auth session into
/// context, kicks off the one-time revalidation, and sets up routing with
/// the protected subtree behind the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::default();
    let events = SessionEvents::new();
    let http = HttpClient::new(DEFAULT_API_BASE, session.clone(), events);
    let auth = AuthSession::new(http.clone());

    provide_context(session);
    provide_context(events);
    provide_context(http);
    provide_context(auth.clone());

    // Initial revalidation fully determines the exit from the loading
    // window; it runs exactly once per process lifetime.
    #[cfg(feature = "csr")]
    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            auth.initialize().await;
        });
    }
    #[cfg(not(feature = "csr"))]
    auth.state.update(|s| s.loading = false);

    view! {
        <Stylesheet id="leptos" href="/pkg/crmdesk.css"/>
        <Title text="CRM Desk"/>

        <Router>
            <SessionExpiryCoordinator/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=RequireAuth>
                    <Route
                        path=StaticSegment("")
                        view=|| {
                            view! { <Redirect path="/dashboard"/> }
                        }
                    />
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("customers") view=CustomerListPage/>
                    <Route
                        path=(StaticSegment("customers"), StaticSegment("add"))
                        view=CustomerFormPage
                    />
                    <Route
                        path=(StaticSegment("customers"), ParamSegment("id"))
                        view=CustomerDetailPage
                    />
                    <Route
                        path=(StaticSegment("customers"), ParamSegment("id"), StaticSegment("edit"))
                        view=CustomerFormPage
                    />
                    <Route path=StaticSegment("plans") view=PlanListPage/>
                    <Route path=(StaticSegment("plans"), StaticSegment("add")) view=PlanFormPage/>
                    <Route path=(StaticSegment("plans"), ParamSegment("id")) view=PlanDetailPage/>
                    <Route
                        path=(StaticSegment("plans"), ParamSegment("id"), StaticSegment("edit"))
                        view=PlanFormPage
                    />
                    <Route path=StaticSegment("billing") view=BillingPage/>
                    <Route path=StaticSegment("support") view=SupportPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Reacts to the transport layer's session-invalid signal.
///
/// The HTTP wrapper evicts the token and bumps the event epoch; this
/// coordinator owns the rest: dropping the in-memory user and navigating
/// to the login view, once per distinct event.
#[component]
fn SessionExpiryCoordinator() -> impl IntoView {
    let events = expect_context::<SessionEvents>();
    let auth = expect_context::<AuthSession>();
    let state = auth.state;
    let navigate = use_navigate();

    Effect::new(move || {
        if events.epoch() == 0 {
            return;
        }
        state.update(|s| s.user = None);
        navigate("/login", NavigateOptions::default());
    });
}
