//! Add/edit form for a customer record.

#[cfg(test)]
#[path = "customer_form_test.rs"]
mod customer_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net;
use crate::net::http::HttpClient;
use crate::net::types::CustomerInput;

/// Validate and assemble the request body from the raw field values.
fn build_customer_input(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    address: &str,
) -> Result<CustomerInput, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    let email = email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
        return Err("First name, last name and email are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(CustomerInput {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        phone: phone.trim().to_owned(),
        address: address.trim().to_owned(),
    })
}

#[component]
pub fn CustomerFormPage() -> impl IntoView {
    let http = expect_context::<HttpClient>();
    let navigate = use_navigate();
    let params = use_params_map();

    // Route decides the mode: `/customers/add` has no id param,
    // `/customers/:id/edit` does.
    let edit_id = params.with_untracked(|p| p.get("id"));
    let is_edit = edit_id.is_some();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
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

    // Edit mode starts by loading the current record into the fields.
    if let Some(id) = edit_id.clone() {
        #[cfg(feature = "csr")]
        {
            let http = http.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = net::customers::fetch_customer(&http, &id).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(customer) => {
                        first_name.set(customer.first_name);
                        last_name.set(customer.last_name);
                        email.set(customer.email);
                        phone.set(customer.phone);
                        address.set(customer.address);
                    }
                    Err(err) => {
                        leptos::logging::warn!("customer load failed: {err}");
                        info.set("Failed to load customer data".to_owned());
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
        let input = match build_customer_input(
            &first_name.get(),
            &last_name.get(),
            &email.get(),
            &phone.get(),
            &address.get(),
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
                    Some(id) => net::customers::update_customer(&http, &id, &input).await,
                    None => net::customers::create_customer(&http, &input).await,
                };
                match result {
                    Ok(_) => navigate("/customers", NavigateOptions::default()),
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
                <h1 class="page-title">
                    {if is_edit { "Edit Customer" } else { "Add New Customer" }}
                </h1>
                <a href="/customers" class="btn">
                    "Back to Customers"
                </a>
            </div>

            <Show when=move || !info.get().is_empty()>
                <p class="page-error">{move || info.get()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading customer data..."</p> }>
                <form class="form-card" on:submit=move |ev| on_submit.run(ev)>
                    <label class="form-card__label">
                        "First Name"
                        <input
                            class="form-card__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-card__label">
                        "Last Name"
                        <input
                            class="form-card__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-card__label">
                        "Email"
                        <input
                            class="form-card__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-card__label">
                        "Phone"
                        <input
                            class="form-card__input"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-card__label">
                        "Address"
                        <input
                            class="form-card__input"
                            type="text"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {if is_edit { "Save Changes" } else { "Create Customer" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
