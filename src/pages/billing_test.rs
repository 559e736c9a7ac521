use super::*;

fn invoice(id: &str, status: &str) -> Invoice {
    Invoice {
        id: id.to_owned(),
        customer_id: "c1".to_owned(),
        customer_name: None,
        amount: 49.99,
        status: status.to_owned(),
        issue_date: None,
        due_date: None,
    }
}

#[test]
fn only_unpaid_invoices_are_payable() {
    assert!(can_mark_paid(&invoice("i1", "Pending")));
    assert!(can_mark_paid(&invoice("i2", "Overdue")));
    assert!(!can_mark_paid(&invoice("i3", "Paid")));
    assert!(!can_mark_paid(&invoice("i4", "PAID")));
}

#[test]
fn replace_invoice_swaps_the_matching_row() {
    let mut list = vec![invoice("i1", "Pending"), invoice("i2", "Pending")];
    replace_invoice(&mut list, invoice("i2", "Paid"));
    assert_eq!(list[0].status, "Pending");
    assert_eq!(list[1].status, "Paid");
}

#[test]
fn replace_invoice_ignores_unknown_ids() {
    let mut list = vec![invoice("i1", "Pending")];
    replace_invoice(&mut list, invoice("missing", "Paid"));
    assert_eq!(list[0].status, "Pending");
}
