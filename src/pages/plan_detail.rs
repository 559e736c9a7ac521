//! Plan detail view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net;
use crate::net::http::HttpClient;
use crate::net::types::Plan;
use crate::util::format::format_price;

#[component]
pub fn PlanDetailPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id")).unwrap_or_default();

    let plan = RwSignal::new(None::<Plan>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let confirm_delete = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let http = http.clone();
        let id = id.clone();
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = net::plans::fetch_plan(&http, &id).await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(record) => plan.set(Some(record)),
                Err(err) => {
                    leptos::logging::warn!("plan load failed: {err}");
                    error.set(Some("Failed to load plan data".to_owned()));
                }
            }
            loading.set(false);
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = &http;
        loading.set(false);
    }

    let on_delete_confirm = Callback::new({
        let http = http.clone();
        let navigate = navigate.clone();
        let id = id.clone();
        move |(): ()| {
            confirm_delete.set(false);
            #[cfg(feature = "csr")]
            {
                let http = http.clone();
                let navigate = navigate.clone();
                let id = id.clone();
                leptos::task::spawn_local(async move {
                    match net::plans::delete_plan(&http, &id).await {
                        Ok(()) => navigate("/plans", NavigateOptions::default()),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&http, &navigate, &id);
            }
        }
    });
    let on_delete_cancel = Callback::new(move |(): ()| confirm_delete.set(false));

    let edit_href = format!("/plans/{id}/edit");

    view! {
        <div class="detail-page">
            <div class="list-page__header">
                <h1 class="page-title">"Plan Details"</h1>
                <div class="list-page__actions">
                    <a href=edit_href class="btn">
                        "Edit"
                    </a>
                    <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>
                        "Delete"
                    </button>
                </div>
            </div>
            <a href="/plans" class="btn">
                "Back to Plans"
            </a>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading plan details..."</p> }>
                <Show
                    when=move || plan.get().is_some()
                    fallback=|| view! { <p class="panel-empty">"Plan not found"</p> }
                >
                    {move || {
                        plan.get()
                            .map(|record| {
                                view! {
                                    <section class="detail-card">
                                        <h2>{record.name.clone()}</h2>
                                        <p>{record.description.clone()}</p>
                                        <dl class="detail-card__fields">
                                            <dt>"Price"</dt>
                                            <dd>{format_price(record.price)}</dd>
                                            <dt>"Billing"</dt>
                                            <dd>{record.duration.label()}</dd>
                                        </dl>
                                        <h3>"Features"</h3>
                                        <ul class="detail-card__list">
                                            {record
                                                .features
                                                .iter()
                                                .map(|feature| view! { <li>{feature.clone()}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </section>
                                }
                            })
                    }}
                </Show>
            </Show>

            <Show when=move || confirm_delete.get()>
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
