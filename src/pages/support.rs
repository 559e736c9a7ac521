//! Support ticket list with close/reopen actions.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

use leptos::prelude::*;

use crate::net;
use crate::net::http::HttpClient;
use crate::net::types::Ticket;

/// Closed tickets offer reopen; everything else offers close.
fn is_closed(ticket: &Ticket) -> bool {
    ticket.status.eq_ignore_ascii_case("closed")
}

/// Swap an updated ticket into the list in place, keyed by id.
fn replace_ticket(tickets: &mut [Ticket], updated: Ticket) {
    if let Some(slot) = tickets.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

#[component]
pub fn SupportPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();

    let tickets = RwSignal::new(Vec::<Ticket>::new());
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
            let result = net::support::fetch_tickets(&http).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(items) => tickets.set(items),
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

    // Close or reopen depending on the ticket's current status; the
    // returned entity replaces the row so the toggle flips immediately.
    let on_toggle = Callback::new({
        let http = http.clone();
        move |(id, closed): (String, bool)| {
            #[cfg(feature = "csr")]
            {
                let http = http.clone();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let result = if closed {
                        net::support::reopen_ticket(&http, &id).await
                    } else {
                        net::support::close_ticket(&http, &id).await
                    };
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(updated) => tickets.update(|list| replace_ticket(list, updated)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&http, id, closed);
            }
        }
    });

    view! {
        <div class="list-page">
            <div class="list-page__header">
                <h1 class="page-title">"Support"</h1>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading tickets..."</p> }>
                <Show
                    when=move || !tickets.get().is_empty()
                    fallback=|| view! { <p class="panel-empty">"No support tickets"</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Ticket"</th>
                                <th>"Customer"</th>
                                <th>"Priority"</th>
                                <th>"Opened"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                tickets
                                    .get()
                                    .into_iter()
                                    .map(|ticket| {
                                        let closed = is_closed(&ticket);
                                        let toggle_id = ticket.id.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    <span class="data-table__primary">{ticket.subject.clone()}</span>
                                                    <span class="data-table__secondary">{ticket.description.clone()}</span>
                                                </td>
                                                <td>{ticket.customer_id.clone()}</td>
                                                <td>{ticket.priority.clone().unwrap_or_else(|| "Normal".to_owned())}</td>
                                                <td>{ticket.created_at.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                <td>
                                                    <span class=format!(
                                                        "status-badge status-badge--{}",
                                                        ticket.status.to_lowercase(),
                                                    )>{ticket.status.clone()}</span>
                                                </td>
                                                <td class="data-table__actions">
                                                    <button
                                                        class="btn btn--link"
                                                        on:click=move |_| on_toggle.run((toggle_id.clone(), closed))
                                                    >
                                                        {if closed { "Reopen" } else { "Close" }}
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
        </div>
    }
}
