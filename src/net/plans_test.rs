use super::*;

#[test]
fn plan_endpoint_formats_expected_path() {
    assert_eq!(plan_endpoint("p7"), "/api/plans/p7");
}
