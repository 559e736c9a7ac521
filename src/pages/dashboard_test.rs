use super::*;

fn sample_stats() -> DashboardStats {
    DashboardStats {
        total_customers: 253,
        customer_growth: 12.0,
        active_plans: 186,
        plan_growth: 5.0,
        monthly_revenue: 28750.0,
        revenue_growth: 8.0,
        support_tickets: 24,
        ticket_growth: -3.0,
        plan_distribution: vec![45, 70, 42, 29],
        ..DashboardStats::default()
    }
}

#[test]
fn stat_cards_cover_the_four_resources() {
    let cards = stat_cards(&sample_stats());
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0].title, "Total Customers");
    assert_eq!(cards[0].value, "253");
    assert_eq!(cards[0].link, "/customers");
    assert_eq!(cards[2].value, "$28,750");
    assert_eq!(cards[3].change, -3.0);
}

#[test]
fn plan_distribution_rows_zip_labels_with_counts() {
    let rows = plan_distribution_rows(&sample_stats());
    assert_eq!(rows, vec![("Basic", 45), ("Standard", 70), ("Premium", 42), ("Enterprise", 29)]);
}

#[test]
fn plan_distribution_rows_default_missing_counts_to_zero() {
    let stats = DashboardStats {
        plan_distribution: vec![45],
        ..DashboardStats::default()
    };
    let rows = plan_distribution_rows(&stats);
    assert_eq!(rows[0], ("Basic", 45));
    assert_eq!(rows[1], ("Standard", 0));
    assert_eq!(rows[3], ("Enterprise", 0));
}
