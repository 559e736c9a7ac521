//! Invoice list with mark-paid and delete actions.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net;
use crate::net::http::HttpClient;
use crate::net::types::Invoice;
use crate::util::format::format_price;

/// Only unpaid invoices offer the mark-paid action.
fn can_mark_paid(invoice: &Invoice) -> bool {
    !invoice.status.eq_ignore_ascii_case("paid")
}

/// Swap an updated invoice into the list in place, keyed by id.
fn replace_invoice(invoices: &mut [Invoice], updated: Invoice) {
    if let Some(slot) = invoices.iter_mut().find(|i| i.id == updated.id) {
        *slot = updated;
    }
}

#[component]
pub fn BillingPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();

    let invoices = RwSignal::new(Vec::<Invoice>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
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
                    let result = net::billing::fetch_invoices(&http).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(items) => invoices.set(items),
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

    let on_mark_paid = Callback::new({
        let http = http.clone();
        move |id: String| {
            #[cfg(feature = "csr")]
            {
                let http = http.clone();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let result = net::billing::mark_invoice_paid(&http, &id).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(updated) => invoices.update(|list| replace_invoice(list, updated)),
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
                    match net::billing::delete_invoice(&http, &id).await {
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
                <h1 class="page-title">"Billing"</h1>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading invoices..."</p> }>
                <Show
                    when=move || !invoices.get().is_empty()
                    fallback=|| view! { <p class="panel-empty">"No invoices"</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Invoice"</th>
                                <th>"Customer"</th>
                                <th>"Amount"</th>
                                <th>"Due"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                invoices
                                    .get()
                                    .into_iter()
                                    .map(|invoice| {
                                        let pay_id = invoice.id.clone();
                                        let delete_id = invoice.id.clone();
                                        let payable = can_mark_paid(&invoice);
                                        view! {
                                            <tr>
                                                <td>{invoice.id.clone()}</td>
                                                <td>
                                                    {invoice
                                                        .customer_name
                                                        .clone()
                                                        .unwrap_or_else(|| invoice.customer_id.clone())}
                                                </td>
                                                <td>{format_price(invoice.amount)}</td>
                                                <td>{invoice.due_date.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                <td>
                                                    <span class=format!(
                                                        "status-badge status-badge--{}",
                                                        invoice.status.to_lowercase(),
                                                    )>{invoice.status.clone()}</span>
                                                </td>
                                                <td class="data-table__actions">
                                                    <Show when=move || payable>
                                                        <button
                                                            class="btn btn--link"
                                                            on:click={
                                                                let pay_id = pay_id.clone();
                                                                move |_| on_mark_paid.run(pay_id.clone())
                                                            }
                                                        >
                                                            "Mark Paid"
                                                        </button>
                                                    </Show>
                                                    <button
                                                        class="btn btn--link btn--danger"
                                                        on:click=move |_| pending_delete.set(Some(delete_id.clone()))
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
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Invoice"
                    message="Are you sure you want to delete this invoice?"
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}
