//! Request builders for the analytics service backing the dashboard.
//!
//! The chart endpoints return series whose shape the analytics service
//! owns; they are passed through as raw JSON for the consuming view to
//! interpret. The stats payload is typed; the dashboard renders it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{Activity, DashboardStats};

const DASHBOARD_ROOT: &str = "/analytics-service/api/dashboard";

fn activities_endpoint(limit: u32) -> String {
    format!("{DASHBOARD_ROOT}/activities?limit={limit}")
}

fn revenue_chart_endpoint(period: &str) -> String {
    format!("{DASHBOARD_ROOT}/revenue-chart?period={period}")
}

fn customer_growth_endpoint(period: &str) -> String {
    format!("{DASHBOARD_ROOT}/customer-growth?period={period}")
}

/// `GET .../dashboard/stats`.
pub async fn fetch_dashboard_stats(http: &HttpClient) -> Result<DashboardStats, ApiError> {
    http.get_json(&format!("{DASHBOARD_ROOT}/stats")).await
}

/// `GET .../dashboard/activities?limit=N`.
pub async fn fetch_recent_activities(http: &HttpClient, limit: u32) -> Result<Vec<Activity>, ApiError> {
    http.get_json(&activities_endpoint(limit)).await
}

/// `GET .../dashboard/revenue-chart?period=P`.
pub async fn fetch_revenue_chart(http: &HttpClient, period: &str) -> Result<serde_json::Value, ApiError> {
    http.get_json(&revenue_chart_endpoint(period)).await
}

/// `GET .../dashboard/customer-growth?period=P`.
pub async fn fetch_customer_growth(http: &HttpClient, period: &str) -> Result<serde_json::Value, ApiError> {
    http.get_json(&customer_growth_endpoint(period)).await
}

/// `GET .../dashboard/plan-distribution`.
pub async fn fetch_plan_distribution(http: &HttpClient) -> Result<serde_json::Value, ApiError> {
    http.get_json(&format!("{DASHBOARD_ROOT}/plan-distribution")).await
}
