//! Authenticated application shell: sidebar, navbar, routed content.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;

#[component]
pub fn MainLayout() -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-shell__main">
                <Navbar/>
                <main class="app-shell__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
