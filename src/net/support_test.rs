use super::*;

#[test]
fn ticket_endpoint_formats_expected_path() {
    assert_eq!(ticket_endpoint("t3"), "/customer-support-service/api/tickets/t3");
}

#[test]
fn customer_tickets_endpoint_formats_expected_path() {
    assert_eq!(
        customer_tickets_endpoint("c42"),
        "/customer-support-service/api/tickets/customer/c42"
    );
}

#[test]
fn action_endpoints_format_expected_paths() {
    assert_eq!(comments_endpoint("t3"), "/customer-support-service/api/tickets/t3/comments");
    assert_eq!(close_endpoint("t3"), "/customer-support-service/api/tickets/t3/close");
    assert_eq!(reopen_endpoint("t3"), "/customer-support-service/api/tickets/t3/reopen");
}
