use super::*;

#[test]
fn invoice_endpoint_formats_expected_path() {
    assert_eq!(invoice_endpoint("i9"), "/api/invoices/i9");
}

#[test]
fn customer_invoices_endpoint_formats_expected_path() {
    assert_eq!(customer_invoices_endpoint("c42"), "/api/invoices/customer/c42");
}

#[test]
fn pay_endpoint_formats_expected_path() {
    assert_eq!(pay_endpoint("i9"), "/api/invoices/i9/pay");
}
