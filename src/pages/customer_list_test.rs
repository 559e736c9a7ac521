use super::*;

fn customer(first: &str, last: &str, email: &str, phone: &str) -> Customer {
    Customer {
        id: format!("{first}-{last}"),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        address: String::new(),
        plan: None,
        status: None,
        created_at: None,
    }
}

fn roster() -> Vec<Customer> {
    vec![
        customer("John", "Doe", "john@example.com", "5551234567"),
        customer("Jane", "Smith", "jane@example.com", "5559876543"),
        customer("Bob", "Johnson", "bob@example.com", "5552223333"),
    ]
}

#[test]
fn empty_term_keeps_everyone() {
    assert_eq!(filter_customers(&roster(), "  ").len(), 3);
}

#[test]
fn filter_matches_names_case_insensitively() {
    let matched = filter_customers(&roster(), "john");
    // "john" hits John Doe's first name and Bob Johnson's last name.
    assert_eq!(matched.len(), 2);
}

#[test]
fn filter_matches_email() {
    let matched = filter_customers(&roster(), "JANE@");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].first_name, "Jane");
}

#[test]
fn filter_matches_phone_verbatim() {
    assert_eq!(filter_customers(&roster(), "555987").len(), 1);
    // Phone matching is literal, not case-folded text.
    assert_eq!(filter_customers(&roster(), "555-987").len(), 0);
}
