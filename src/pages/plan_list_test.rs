use super::*;

use crate::net::types::PlanDuration;

fn plan(name: &str, description: &str, duration: PlanDuration) -> Plan {
    Plan {
        id: name.to_lowercase(),
        name: name.to_owned(),
        description: description.to_owned(),
        price: 49.99,
        duration,
        features: vec!["Feature 1".to_owned()],
    }
}

fn catalog() -> Vec<Plan> {
    vec![
        plan("Basic Plan", "Basic features included", PlanDuration::Monthly),
        plan("Premium Plan", "All features included", PlanDuration::Monthly),
        plan("Annual Basic", "Basic plan, yearly billing", PlanDuration::Yearly),
    ]
}

#[test]
fn empty_term_keeps_every_plan() {
    assert_eq!(filter_plans(&catalog(), "").len(), 3);
}

#[test]
fn filter_matches_name_and_description() {
    assert_eq!(filter_plans(&catalog(), "basic").len(), 2);
    assert_eq!(filter_plans(&catalog(), "ALL FEATURES").len(), 1);
}

#[test]
fn filter_matches_duration_label() {
    let matched = filter_plans(&catalog(), "yearly");
    // Hits the Yearly duration and the "yearly billing" description.
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Annual Basic");
}
