//! Shared wire DTOs for the remote CRM services.
//!
//! DESIGN
//! ======
//! The backends speak camelCase JSON; renames keep the Rust side idiomatic.
//! Fields the services have been observed to omit carry `#[serde(default)]`
//! so one sloppy payload cannot take a whole list view down.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the identity endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Raw login response. The auth service has shipped the token under two
/// different field names; both are modeled and normalized explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl LoginResponse {
    /// Normalized session token. Precedence: `token` first, then
    /// `accessToken`. `None` means the response carried no credential.
    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref().or(self.access_token.as_deref())
    }
}

/// Registration request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// A customer record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    /// Name of the active plan, if the customer service joins it in.
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update body for a customer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Billing cycle of a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanDuration {
    Monthly,
    Quarterly,
    #[serde(rename = "Semi-Annual")]
    SemiAnnual,
    Yearly,
}

impl PlanDuration {
    /// All durations, in the order the plan form offers them.
    pub const ALL: [PlanDuration; 4] = [
        PlanDuration::Monthly,
        PlanDuration::Quarterly,
        PlanDuration::SemiAnnual,
        PlanDuration::Yearly,
    ];

    /// Wire/display label for this duration.
    pub fn label(self) -> &'static str {
        match self {
            PlanDuration::Monthly => "Monthly",
            PlanDuration::Quarterly => "Quarterly",
            PlanDuration::SemiAnnual => "Semi-Annual",
            PlanDuration::Yearly => "Yearly",
        }
    }

    /// Parse a wire/display label back into a duration.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl std::fmt::Display for PlanDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A subscription plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub duration: PlanDuration,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Create/update body for a plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: PlanDuration,
    pub features: Vec<String>,
}

/// An invoice from the billing service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Create/update body for an invoice.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInput {
    pub customer_id: String,
    pub amount: f64,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// A support ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub customer_id: String,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub comments: Vec<TicketComment>,
}

/// A comment on a support ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketComment {
    #[serde(default)]
    pub author: String,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update body for a ticket.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInput {
    pub customer_id: String,
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Option<String>,
}

/// Body for adding a ticket comment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub message: String,
}

/// Aggregate dashboard statistics from the analytics service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_customers: i64,
    #[serde(default)]
    pub customer_growth: f64,
    #[serde(default)]
    pub active_plans: i64,
    #[serde(default)]
    pub plan_growth: f64,
    #[serde(default)]
    pub monthly_revenue: f64,
    #[serde(default)]
    pub revenue_growth: f64,
    #[serde(default)]
    pub support_tickets: i64,
    #[serde(default)]
    pub ticket_growth: f64,
    #[serde(default)]
    pub revenue_chart: Vec<f64>,
    #[serde(default)]
    pub customer_chart: Vec<i64>,
    #[serde(default)]
    pub plan_distribution: Vec<i64>,
    #[serde(default)]
    pub recent_activities: Vec<Activity>,
}

/// One row of the recent-activity feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub customer: String,
    #[serde(default)]
    pub email: String,
    pub action: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: String,
}
