//! Customer detail view with subscription, invoice, and ticket summaries.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net;
use crate::net::http::HttpClient;
use crate::net::types::{Customer, Invoice, Ticket};
use crate::util::format::{display_or, format_price};

#[component]
pub fn CustomerDetailPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id")).unwrap_or_default();

    let customer = RwSignal::new(None::<Customer>);
    let invoices = RwSignal::new(Vec::<Invoice>::new());
    let tickets = RwSignal::new(Vec::<Ticket>::new());
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
            let fetched = net::customers::fetch_customer(&http, &id).await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match fetched {
                Ok(record) => {
                    customer.set(Some(record));
                    // The side panels are best-effort; a failure there
                    // should not take the whole view down.
                    match net::billing::fetch_customer_invoices(&http, &id).await {
                        Ok(items) => {
                            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                                invoices.set(items);
                            }
                        }
                        Err(err) => leptos::logging::warn!("customer invoices load failed: {err}"),
                    }
                    match net::support::fetch_customer_tickets(&http, &id).await {
                        Ok(items) => {
                            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                                tickets.set(items);
                            }
                        }
                        Err(err) => leptos::logging::warn!("customer tickets load failed: {err}"),
                    }
                }
                Err(err) => {
                    leptos::logging::warn!("customer load failed: {err}");
                    error.set(Some("Failed to load customer data".to_owned()));
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
                    match net::customers::delete_customer(&http, &id).await {
                        Ok(()) => navigate("/customers", NavigateOptions::default()),
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

    let edit_href = format!("/customers/{id}/edit");

    view! {
        <div class="detail-page">
            <div class="list-page__header">
                <h1 class="page-title">"Customer Details"</h1>
                <div class="list-page__actions">
                    <a href=edit_href class="btn">
                        "Edit"
                    </a>
                    <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>
                        "Delete"
                    </button>
                </div>
            </div>
            <a href="/customers" class="btn">
                "Back to Customers"
            </a>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading customer details..."</p> }>
                <Show
                    when=move || customer.get().is_some()
                    fallback=|| view! { <p class="panel-empty">"Customer not found"</p> }
                >
                    {move || {
                        customer
                            .get()
                            .map(|record| {
                                view! {
                                    <div class="detail-page__grid">
                                        <section class="detail-card">
                                            <h2>{format!("{} {}", record.first_name, record.last_name)}</h2>
                                            <dl class="detail-card__fields">
                                                <dt>"Email"</dt>
                                                <dd>{record.email.clone()}</dd>
                                                <dt>"Phone"</dt>
                                                <dd>{display_or(&record.phone, "No phone number provided").to_owned()}</dd>
                                                <dt>"Address"</dt>
                                                <dd>{display_or(&record.address, "No address provided").to_owned()}</dd>
                                            </dl>
                                        </section>
                                        <section class="detail-card">
                                            <h2>"Subscription Information"</h2>
                                            <dl class="detail-card__fields">
                                                <dt>"Current Plan"</dt>
                                                <dd>{record.plan.clone().unwrap_or_else(|| "No active plan".to_owned())}</dd>
                                                <dt>"Status"</dt>
                                                <dd>{record.status.clone().unwrap_or_else(|| "Inactive".to_owned())}</dd>
                                                <dt>"Customer Since"</dt>
                                                <dd>{record.created_at.clone().unwrap_or_else(|| "N/A".to_owned())}</dd>
                                            </dl>
                                        </section>
                                    </div>
                                }
                            })
                    }}
                </Show>

                <section class="detail-card">
                    <h2>"Invoices"</h2>
                    <Show
                        when=move || !invoices.get().is_empty()
                        fallback=|| view! { <p class="panel-empty">"No invoices"</p> }
                    >
                        <ul class="detail-card__list">
                            {move || {
                                invoices
                                    .get()
                                    .into_iter()
                                    .map(|invoice| {
                                        view! {
                                            <li>
                                                <span>{invoice.id.clone()}</span>
                                                <span>{format_price(invoice.amount)}</span>
                                                <span>{invoice.status.clone()}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </section>

                <section class="detail-card">
                    <h2>"Support Tickets"</h2>
                    <Show
                        when=move || !tickets.get().is_empty()
                        fallback=|| view! { <p class="panel-empty">"No support tickets"</p> }
                    >
                        <ul class="detail-card__list">
                            {move || {
                                tickets
                                    .get()
                                    .into_iter()
                                    .map(|ticket| {
                                        view! {
                                            <li>
                                                <span>{ticket.subject.clone()}</span>
                                                <span>{ticket.status.clone()}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </section>
            </Show>

            <Show when=move || confirm_delete.get()>
                <ConfirmDialog
                    title="Delete Customer"
                    message="Are you sure you want to delete this customer?"
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}
