use super::*;

#[test]
fn session_token_prefers_token_over_access_token() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"token":"T","accessToken":"A"}"#).expect("parse");
    assert_eq!(body.session_token(), Some("T"));
}

#[test]
fn session_token_falls_back_to_access_token() {
    let body: LoginResponse = serde_json::from_str(r#"{"accessToken":"A"}"#).expect("parse");
    assert_eq!(body.session_token(), Some("A"));
}

#[test]
fn session_token_is_none_when_both_fields_are_absent() {
    let body: LoginResponse = serde_json::from_str(r#"{"user":{"username":"a"}}"#).expect("parse");
    assert_eq!(body.session_token(), None);
}

#[test]
fn login_response_user_tolerates_missing_fields() {
    let body: LoginResponse = serde_json::from_str(r#"{"token":"T","user":{"username":"a"}}"#).expect("parse");
    let user = body.user.expect("user");
    assert_eq!(user.username, "a");
    assert_eq!(user.email, "");
    assert_eq!(user.role, "");
}

#[test]
fn customer_deserializes_camel_case_payload() {
    let json = r#"{
        "id": "1",
        "firstName": "John",
        "lastName": "Doe",
        "email": "john@example.com",
        "phone": "5551234567",
        "address": "123 Main St",
        "createdAt": "2023-03-28"
    }"#;
    let customer: Customer = serde_json::from_str(json).expect("parse");
    assert_eq!(customer.first_name, "John");
    assert_eq!(customer.created_at.as_deref(), Some("2023-03-28"));
    assert_eq!(customer.plan, None);
}

#[test]
fn plan_duration_uses_hyphenated_semi_annual_on_the_wire() {
    let json = serde_json::to_string(&PlanDuration::SemiAnnual).expect("serialize");
    assert_eq!(json, r#""Semi-Annual""#);
    let back: PlanDuration = serde_json::from_str(&json).expect("parse");
    assert_eq!(back, PlanDuration::SemiAnnual);
}

#[test]
fn plan_duration_parse_accepts_every_label() {
    for duration in PlanDuration::ALL {
        assert_eq!(PlanDuration::parse(duration.label()), Some(duration));
    }
    assert_eq!(PlanDuration::parse("Weekly"), None);
}

#[test]
fn dashboard_stats_default_missing_series() {
    let stats: DashboardStats =
        serde_json::from_str(r#"{"totalCustomers":253,"monthlyRevenue":28750}"#).expect("parse");
    assert_eq!(stats.total_customers, 253);
    assert!(stats.revenue_chart.is_empty());
    assert!(stats.recent_activities.is_empty());
}
