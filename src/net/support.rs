//! Request builders for the customer-support service.
//!
//! Unlike the other resources, the support service sits behind its own
//! gateway prefix rather than the shared `/api` root.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{NewComment, Ticket, TicketInput};

const TICKETS_ROOT: &str = "/customer-support-service/api/tickets";

fn ticket_endpoint(id: &str) -> String {
    format!("{TICKETS_ROOT}/{id}")
}

fn customer_tickets_endpoint(customer_id: &str) -> String {
    format!("{TICKETS_ROOT}/customer/{customer_id}")
}

fn comments_endpoint(id: &str) -> String {
    format!("{TICKETS_ROOT}/{id}/comments")
}

fn close_endpoint(id: &str) -> String {
    format!("{TICKETS_ROOT}/{id}/close")
}

fn reopen_endpoint(id: &str) -> String {
    format!("{TICKETS_ROOT}/{id}/reopen")
}

/// `GET .../tickets`.
pub async fn fetch_tickets(http: &HttpClient) -> Result<Vec<Ticket>, ApiError> {
    http.get_json(TICKETS_ROOT).await
}

/// `GET .../tickets/{id}`.
pub async fn fetch_ticket(http: &HttpClient, id: &str) -> Result<Ticket, ApiError> {
    http.get_json(&ticket_endpoint(id)).await
}

/// `GET .../tickets/customer/{customer_id}`.
pub async fn fetch_customer_tickets(http: &HttpClient, customer_id: &str) -> Result<Vec<Ticket>, ApiError> {
    http.get_json(&customer_tickets_endpoint(customer_id)).await
}

/// `POST .../tickets`.
pub async fn create_ticket(http: &HttpClient, input: &TicketInput) -> Result<Ticket, ApiError> {
    http.post_json(TICKETS_ROOT, input).await
}

/// `PUT .../tickets/{id}`.
pub async fn update_ticket(http: &HttpClient, id: &str, input: &TicketInput) -> Result<Ticket, ApiError> {
    http.put_json(&ticket_endpoint(id), input).await
}

/// `POST .../tickets/{id}/comments`.
pub async fn add_ticket_comment(http: &HttpClient, id: &str, comment: &NewComment) -> Result<Ticket, ApiError> {
    http.post_json(&comments_endpoint(id), comment).await
}

/// `PUT .../tickets/{id}/close`; returns the updated ticket.
pub async fn close_ticket(http: &HttpClient, id: &str) -> Result<Ticket, ApiError> {
    http.put_empty(&close_endpoint(id)).await
}

/// `PUT .../tickets/{id}/reopen`; returns the updated ticket.
pub async fn reopen_ticket(http: &HttpClient, id: &str) -> Result<Ticket, ApiError> {
    http.put_empty(&reopen_endpoint(id)).await
}
