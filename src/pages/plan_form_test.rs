use super::*;

#[test]
fn clean_features_drops_blank_rows_and_trims() {
    let rows = vec![
        " Feature 1 ".to_owned(),
        "   ".to_owned(),
        String::new(),
        "Feature 2".to_owned(),
    ];
    assert_eq!(clean_features(&rows), vec!["Feature 1".to_owned(), "Feature 2".to_owned()]);
}

#[test]
fn build_plan_input_parses_price_and_cleans_features() {
    let input = build_plan_input(
        " Basic Plan ",
        " Basic features ",
        " 49.99 ",
        PlanDuration::Monthly,
        &["Feature 1".to_owned(), String::new()],
    )
    .expect("valid");
    assert_eq!(input.name, "Basic Plan");
    assert_eq!(input.description, "Basic features");
    assert!((input.price - 49.99).abs() < f64::EPSILON);
    assert_eq!(input.features, vec!["Feature 1".to_owned()]);
}

#[test]
fn build_plan_input_requires_a_name() {
    assert_eq!(
        build_plan_input("  ", "", "49.99", PlanDuration::Monthly, &[]),
        Err("Plan name is required.")
    );
}

#[test]
fn build_plan_input_rejects_unparseable_price() {
    assert_eq!(
        build_plan_input("Basic", "", "free", PlanDuration::Monthly, &[]),
        Err("Enter a valid price.")
    );
}

#[test]
fn build_plan_input_rejects_negative_price() {
    assert_eq!(
        build_plan_input("Basic", "", "-5", PlanDuration::Monthly, &[]),
        Err("Enter a valid price.")
    );
}
