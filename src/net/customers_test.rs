use super::*;

#[test]
fn customer_endpoint_formats_expected_path() {
    assert_eq!(customer_endpoint("c42"), "/api/customers/c42");
}
