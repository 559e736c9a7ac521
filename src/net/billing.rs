//! Request builders for the billing service.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{Invoice, InvoiceInput};

fn invoice_endpoint(id: &str) -> String {
    format!("/api/invoices/{id}")
}

fn customer_invoices_endpoint(customer_id: &str) -> String {
    format!("/api/invoices/customer/{customer_id}")
}

fn pay_endpoint(id: &str) -> String {
    format!("/api/invoices/{id}/pay")
}

/// `GET /api/invoices`.
pub async fn fetch_invoices(http: &HttpClient) -> Result<Vec<Invoice>, ApiError> {
    http.get_json("/api/invoices").await
}

/// `GET /api/invoices/{id}`.
pub async fn fetch_invoice(http: &HttpClient, id: &str) -> Result<Invoice, ApiError> {
    http.get_json(&invoice_endpoint(id)).await
}

/// `GET /api/invoices/customer/{customer_id}`.
pub async fn fetch_customer_invoices(http: &HttpClient, customer_id: &str) -> Result<Vec<Invoice>, ApiError> {
    http.get_json(&customer_invoices_endpoint(customer_id)).await
}

/// `POST /api/invoices`.
pub async fn create_invoice(http: &HttpClient, input: &InvoiceInput) -> Result<Invoice, ApiError> {
    http.post_json("/api/invoices", input).await
}

/// `PUT /api/invoices/{id}`.
pub async fn update_invoice(http: &HttpClient, id: &str, input: &InvoiceInput) -> Result<Invoice, ApiError> {
    http.put_json(&invoice_endpoint(id), input).await
}

/// `PUT /api/invoices/{id}/pay`; returns the updated invoice.
pub async fn mark_invoice_paid(http: &HttpClient, id: &str) -> Result<Invoice, ApiError> {
    http.put_empty(&pay_endpoint(id)).await
}

/// `DELETE /api/invoices/{id}`.
pub async fn delete_invoice(http: &HttpClient, id: &str) -> Result<(), ApiError> {
    http.delete(&invoice_endpoint(id)).await
}
