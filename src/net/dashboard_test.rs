use super::*;

#[test]
fn activities_endpoint_carries_limit_param() {
    assert_eq!(activities_endpoint(10), "/analytics-service/api/dashboard/activities?limit=10");
}

#[test]
fn chart_endpoints_carry_period_param() {
    assert_eq!(
        revenue_chart_endpoint("monthly"),
        "/analytics-service/api/dashboard/revenue-chart?period=monthly"
    );
    assert_eq!(
        customer_growth_endpoint("monthly"),
        "/analytics-service/api/dashboard/customer-growth?period=monthly"
    );
}
