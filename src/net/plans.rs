//! Request builders for the plan service.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{Plan, PlanInput};

fn plan_endpoint(id: &str) -> String {
    format!("/api/plans/{id}")
}

/// `GET /api/plans`.
pub async fn fetch_plans(http: &HttpClient) -> Result<Vec<Plan>, ApiError> {
    http.get_json("/api/plans").await
}

/// `GET /api/plans/{id}`.
pub async fn fetch_plan(http: &HttpClient, id: &str) -> Result<Plan, ApiError> {
    http.get_json(&plan_endpoint(id)).await
}

/// `POST /api/plans`.
pub async fn create_plan(http: &HttpClient, input: &PlanInput) -> Result<Plan, ApiError> {
    http.post_json("/api/plans", input).await
}

/// `PUT /api/plans/{id}`.
pub async fn update_plan(http: &HttpClient, id: &str, input: &PlanInput) -> Result<Plan, ApiError> {
    http.put_json(&plan_endpoint(id), input).await
}

/// `DELETE /api/plans/{id}`.
pub async fn delete_plan(http: &HttpClient, id: &str) -> Result<(), ApiError> {
    http.delete(&plan_endpoint(id)).await
}
