//! Request builders for the customer service.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{Customer, CustomerInput};

fn customer_endpoint(id: &str) -> String {
    format!("/api/customers/{id}")
}

/// `GET /api/customers`.
pub async fn fetch_customers(http: &HttpClient) -> Result<Vec<Customer>, ApiError> {
    http.get_json("/api/customers").await
}

/// `GET /api/customers/{id}`.
pub async fn fetch_customer(http: &HttpClient, id: &str) -> Result<Customer, ApiError> {
    http.get_json(&customer_endpoint(id)).await
}

/// `POST /api/customers`.
pub async fn create_customer(http: &HttpClient, input: &CustomerInput) -> Result<Customer, ApiError> {
    http.post_json("/api/customers", input).await
}

/// `PUT /api/customers/{id}`.
pub async fn update_customer(http: &HttpClient, id: &str, input: &CustomerInput) -> Result<Customer, ApiError> {
    http.put_json(&customer_endpoint(id), input).await
}

/// `DELETE /api/customers/{id}`.
pub async fn delete_customer(http: &HttpClient, id: &str) -> Result<(), ApiError> {
    http.delete(&customer_endpoint(id)).await
}
