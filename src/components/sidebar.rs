//! Sidebar navigation between the main resource views.

use leptos::prelude::*;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("/dashboard", "Dashboard"),
    ("/customers", "Customers"),
    ("/plans", "Plans"),
    ("/billing", "Billing"),
    ("/support", "Support"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li class="sidebar__item">
                                <a href=href class="sidebar__link">
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
