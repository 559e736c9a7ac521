//! Customer list with search, pagination, and delete.

#[cfg(test)]
#[path = "customer_list_test.rs"]
mod customer_list_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net;
use crate::net::http::HttpClient;
use crate::net::types::Customer;
use crate::util::pagination::{page_count, page_items};

const ITEMS_PER_PAGE: usize = 10;

/// Case-insensitive match on name and email; phone matches verbatim.
fn filter_customers(customers: &[Customer], term: &str) -> Vec<Customer> {
    let term = term.trim();
    if term.is_empty() {
        return customers.to_vec();
    }
    let needle = term.to_lowercase();
    customers
        .iter()
        .filter(|c| {
            c.first_name.to_lowercase().contains(&needle)
                || c.last_name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c.phone.contains(term)
        })
        .cloned()
        .collect()
}

#[component]
pub fn CustomerListPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();

    let customers = RwSignal::new(Vec::<Customer>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);
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
                    let result = net::customers::fetch_customers(&http).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(items) => customers.set(items),
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
                    match net::customers::delete_customer(&http, &id).await {
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

    let visible = move || {
        let filtered = filter_customers(&customers.get(), &search.get());
        let current = page.get();
        page_items(&filtered, current, ITEMS_PER_PAGE).to_vec()
    };
    let pages = move || page_count(filter_customers(&customers.get(), &search.get()).len(), ITEMS_PER_PAGE);

    view! {
        <div class="list-page">
            <div class="list-page__header">
                <h1 class="page-title">"Customers"</h1>
                <a href="/customers/add" class="btn btn--primary">
                    "+ Add Customer"
                </a>
            </div>

            <input
                class="list-page__search"
                type="text"
                placeholder="Search customers..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    search.set(event_target_value(&ev));
                    page.set(1);
                }
            />

            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading customers..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Customer"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Address"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible()
                                .into_iter()
                                .map(|customer| {
                                    let id = customer.id.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <span class="data-table__primary">
                                                    {format!("{} {}", customer.first_name, customer.last_name)}
                                                </span>
                                            </td>
                                            <td>{customer.email}</td>
                                            <td>{customer.phone}</td>
                                            <td>{customer.address}</td>
                                            <td class="data-table__actions">
                                                <a href=format!("/customers/{}", customer.id)>"View"</a>
                                                <a href=format!("/customers/{}/edit", customer.id)>"Edit"</a>
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

                <div class="list-page__pager">
                    <button
                        class="btn"
                        disabled=move || page.get() <= 1
                        on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "Previous"
                    </button>
                    <span>{move || format!("Page {} of {}", page.get(), pages())}</span>
                    <button
                        class="btn"
                        disabled=move || page.get() >= pages()
                        on:click=move |_| page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
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
