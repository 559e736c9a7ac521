//! Add/edit form for a subscription plan with dynamic feature rows.

#[cfg(test)]
#[path = "plan_form_test.rs"]
mod plan_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net;
use crate::net::http::HttpClient;
use crate::net::types::{PlanDuration, PlanInput};

/// Drop blank feature rows and trim the rest, preserving order.
fn clean_features(features: &[String]) -> Vec<String> {
    features
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Validate and assemble the request body from the raw field values.
fn build_plan_input(
    name: &str,
    description: &str,
    price: &str,
    duration: PlanDuration,
    features: &[String],
) -> Result<PlanInput, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Plan name is required.");
    }
    let price: f64 = price.trim().parse().map_err(|_| "Enter a valid price.")?;
    if price < 0.0 {
        return Err("Enter a valid price.");
    }
    Ok(PlanInput {
        name: name.to_owned(),
        description: description.trim().to_owned(),
        price,
        duration,
        features: clean_features(features),
    })
}

#[component]
pub fn PlanFormPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let navigate = use_navigate();
    let params = use_params_map();

    let edit_id = params.with_untracked(|p| p.get("id"));
    let is_edit = edit_id.is_some();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let duration = RwSignal::new(PlanDuration::Monthly);
    let features = RwSignal::new(vec![String::new()]);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let loading = RwSignal::new(is_edit);

    #[cfg(feature = "csr")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "csr")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    if let Some(id) = edit_id.clone() {
        #[cfg(feature = "csr")]
        {
            let http = http.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = net::plans::fetch_plan(&http, &id).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(plan) => {
                        name.set(plan.name);
                        description.set(plan.description);
                        price.set(format!("{}", plan.price));
                        duration.set(plan.duration);
                        let rows = if plan.features.is_empty() {
                            vec![String::new()]
                        } else {
                            plan.features
                        };
                        features.set(rows);
                    }
                    Err(err) => {
                        leptos::logging::warn!("plan load failed: {err}");
                        info.set("Failed to load plan data".to_owned());
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&http, id);
            loading.set(false);
        }
    }

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match build_plan_input(
            &name.get(),
            &description.get(),
            &price.get(),
            duration.get(),
            &features.get(),
        ) {
            Ok(input) => input,
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
            let edit_id = edit_id.clone();
            leptos::task::spawn_local(async move {
                let result = match edit_id {
                    Some(id) => net::plans::update_plan(&http, &id, &input).await,
                    None => net::plans::create_plan(&http, &input).await,
                };
                match result {
                    Ok(_) => navigate("/plans", NavigateOptions::default()),
                    Err(err) => {
                        info.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&http, &navigate, &edit_id, input);
            busy.set(false);
        }
    });

    view! {
        <div class="form-page">
            <div class="list-page__header">
                <h1 class="page-title">{if is_edit { "Edit Plan" } else { "Add New Plan" }}</h1>
                <a href="/plans" class="btn">
                    "Back to Plans"
                </a>
            </div>

            <Show when=move || !info.get().is_empty()>
                <p class="page-error">{move || info.get()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading plan data..."</p> }>
                <form class="form-card" on:submit=move |ev| on_submit.run(ev)>
                    <label class="form-card__label">
                        "Name"
                        <input
                            class="form-card__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-card__label">
                        "Description"
                        <input
                            class="form-card__input"
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-card__label">
                        "Price"
                        <input
                            class="form-card__input"
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-card__label">
                        "Duration"
                        <select
                            class="form-card__input"
                            on:change=move |ev| {
                                if let Some(parsed) = PlanDuration::parse(&event_target_value(&ev)) {
                                    duration.set(parsed);
                                }
                            }
                        >
                            {PlanDuration::ALL
                                .into_iter()
                                .map(|d| {
                                    view! {
                                        <option value=d.label() selected=move || duration.get() == d>
                                            {d.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <fieldset class="form-card__features">
                        <legend>"Features"</legend>
                        {move || {
                            features
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, feature)| {
                                    view! {
                                        <div class="form-card__feature-row">
                                            <input
                                                class="form-card__input"
                                                type="text"
                                                placeholder="Feature description"
                                                prop:value=feature
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    features
                                                        .update(|rows| {
                                                            if let Some(row) = rows.get_mut(index) {
                                                                *row = value;
                                                            }
                                                        });
                                                }
                                            />
                                            <button
                                                type="button"
                                                class="btn btn--link btn--danger"
                                                on:click=move |_| {
                                                    features
                                                        .update(|rows| {
                                                            if rows.len() > 1 {
                                                                rows.remove(index);
                                                            }
                                                        });
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <button
                            type="button"
                            class="btn"
                            on:click=move |_| features.update(|rows| rows.push(String::new()))
                        >
                            "+ Add Feature"
                        </button>
                    </fieldset>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {if is_edit { "Save Changes" } else { "Create Plan" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
