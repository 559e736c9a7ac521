//! Plan list with search and delete.

#[cfg(test)]
#[path = "plan_list_test.rs"]
mod plan_list_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net;
use crate::net::http::HttpClient;
use crate::net::types::Plan;
use crate::util::format::format_price;

/// Case-insensitive match on name, description, and billing cycle.
fn filter_plans(plans: &[Plan], term: &str) -> Vec<Plan> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return plans.to_vec();
    }
    plans
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.duration.label().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn PlanListPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();

    let plans = RwSignal::new(Vec::<Plan>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "csr")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let load = Callback::new({
        let http = http.clone();
        #[cfg(feature = "csr")]
        let alive = alive.clone();
        move |(): ()| {
            loading.set(true);
            error.set(None);
            #[cfg(feature = "csr")]
            {
                let http = http.clone();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let result = net::plans::fetch_plans(&http).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(items) => plans.set(items),
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
        }
    });
    load.run(());

    let on_delete_confirm = Callback::new({
        let http = http.clone();
        move |(): ()| {
            let Some(id) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            #[cfg(feature = "csr")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    match net::plans::delete_plan(&http, &id).await {
                        Ok(()) => load.run(()),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&http, id);
            }
        }
    });
    let on_delete_cancel = Callback::new(move |(): ()| pending_delete.set(None));

    view! {
        <div class="list-page">
            <div class="list-page__header">
                <h1 class="page-title">"Plans"</h1>
                <a href="/plans/add" class="btn btn--primary">
                    "+ Add Plan"
                </a>
            </div>

            <input
                class="list-page__search"
                type="text"
                placeholder="Search plans..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading plans..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Plan"</th>
                            <th>"Price"</th>
                            <th>"Duration"</th>
                            <th>"Description"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filter_plans(&plans.get(), &search.get())
                                .into_iter()
                                .map(|plan| {
                                    let id = plan.id.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <span class="data-table__primary">{plan.name.clone()}</span>
                                                <span class="data-table__secondary">
                                                    {format!("{} features", plan.features.len())}
                                                </span>
                                            </td>
                                            <td>{format_price(plan.price)}</td>
                                            <td>{plan.duration.label()}</td>
                                            <td>{plan.description.clone()}</td>
                                            <td class="data-table__actions">
                                                <a href=format!("/plans/{}", plan.id)>"View"</a>
                                                <a href=format!("/plans/{}/edit", plan.id)>"Edit"</a>
                                                <button
                                                    class="btn btn--link btn--danger"
                                                    on:click=move |_| pending_delete.set(Some(id.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Plan"
                    message="Are you sure you want to delete this plan?"
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}
