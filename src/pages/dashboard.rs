//! Dashboard page summarizing portal activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the aggregate stats
//! from the analytics service on mount and refreshes them periodically
//! while the view stays alive.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net;
use crate::net::http::HttpClient;
use crate::net::types::DashboardStats;
use crate::util::format::{format_usd, growth_label};

#[cfg(feature = "csr")]
const REFRESH_SECS: u64 = 60;

/// Labels for the plan-distribution segments, in service order.
const PLAN_SEGMENTS: [&str; 4] = ["Basic", "Standard", "Premium", "Enterprise"];

/// One summary card on the dashboard.
#[derive(Clone, Debug, PartialEq)]
struct StatCard {
    title: &'static str,
    value: String,
    change: f64,
    link: &'static str,
}

fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Customers",
            value: stats.total_customers.to_string(),
            change: stats.customer_growth,
            link: "/customers",
        },
        StatCard {
            title: "Active Plans",
            value: stats.active_plans.to_string(),
            change: stats.plan_growth,
            link: "/plans",
        },
        StatCard {
            title: "Monthly Revenue",
            value: format_usd(stats.monthly_revenue),
            change: stats.revenue_growth,
            link: "/billing",
        },
        StatCard {
            title: "Support Tickets",
            value: stats.support_tickets.to_string(),
            change: stats.ticket_growth,
            link: "/support",
        },
    ]
}

/// Zip the distribution counts with their segment labels; extra counts
/// beyond the known segments are dropped, missing ones show as zero.
fn plan_distribution_rows(stats: &DashboardStats) -> Vec<(&'static str, i64)> {
    PLAN_SEGMENTS
        .into_iter()
        .enumerate()
        .map(|(i, label)| (label, stats.plan_distribution.get(i).copied().unwrap_or(0)))
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();

    let stats = RwSignal::new(DashboardStats::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "csr")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    #[cfg(feature = "csr")]
    {
        let http = http.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = net::dashboard::fetch_dashboard_stats(&http).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(latest) => stats.set(latest),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = &http;
        loading.set(false);
    }

    // Background refresh keeps the numbers current while the tab sits
    // open; a failed refresh keeps the last good payload on screen.
    #[cfg(feature = "csr")]
    {
        let http = http.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(REFRESH_SECS)).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                match net::dashboard::fetch_dashboard_stats(&http).await {
                    Ok(latest) => {
                        if alive.load(std::sync::atomic::Ordering::Relaxed) {
                            stats.set(latest);
                        }
                    }
                    Err(err) => leptos::logging::warn!("dashboard refresh failed: {err}"),
                }
            }
        });
    }

    view! {
        <div class="dashboard-page">
            <h1 class="page-title">"Dashboard"</h1>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading dashboard..."</p> }>
                <div class="dashboard-page__cards">
                    {move || {
                        stat_cards(&stats.get())
                            .into_iter()
                            .map(|card| {
                                let direction = if card.change < 0.0 { "down" } else { "up" };
                                view! {
                                    <a href=card.link class="stat-card">
                                        <span class="stat-card__title">{card.title}</span>
                                        <span class="stat-card__value">{card.value}</span>
                                        <span class=format!("stat-card__change stat-card__change--{direction}")>
                                            {growth_label(card.change)}
                                        </span>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <section class="dashboard-page__panel">
                    <h2>"Plan Distribution"</h2>
                    <ul class="distribution-list">
                        {move || {
                            plan_distribution_rows(&stats.get())
                                .into_iter()
                                .map(|(label, count)| {
                                    view! {
                                        <li class="distribution-list__row">
                                            <span>{label}</span>
                                            <span>{count}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>

                <section class="dashboard-page__panel">
                    <h2>"Recent Activity"</h2>
                    <Show
                        when=move || !stats.get().recent_activities.is_empty()
                        fallback=|| view! { <p class="panel-empty">"No recent activity"</p> }
                    >
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Customer"</th>
                                    <th>"Action"</th>
                                    <th>"Date"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    stats
                                        .get()
                                        .recent_activities
                                        .into_iter()
                                        .map(|activity| {
                                            view! {
                                                <tr>
                                                    <td>
                                                        <span class="data-table__primary">{activity.customer}</span>
                                                        <span class="data-table__secondary">{activity.email}</span>
                                                    </td>
                                                    <td>{activity.action}</td>
                                                    <td>{activity.date}</td>
                                                    <td>{activity.status}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </section>
            </Show>
        </div>
    }
}
