use super::*;

#[test]
fn build_customer_input_trims_all_fields() {
    let input = build_customer_input(" John ", " Doe ", " john@example.com ", " 555 ", " Main St ")
        .expect("valid");
    assert_eq!(input.first_name, "John");
    assert_eq!(input.last_name, "Doe");
    assert_eq!(input.email, "john@example.com");
    assert_eq!(input.phone, "555");
    assert_eq!(input.address, "Main St");
}

#[test]
fn build_customer_input_requires_names_and_email() {
    assert_eq!(
        build_customer_input("", "Doe", "a@b.com", "", ""),
        Err("First name, last name and email are required.")
    );
    assert_eq!(
        build_customer_input("John", "Doe", "  ", "", ""),
        Err("First name, last name and email are required.")
    );
}

#[test]
fn build_customer_input_rejects_invalid_email() {
    assert_eq!(
        build_customer_input("John", "Doe", "not-an-email", "", ""),
        Err("Enter a valid email address.")
    );
}

#[test]
fn phone_and_address_are_optional() {
    let input = build_customer_input("John", "Doe", "a@b.com", "", "").expect("valid");
    assert_eq!(input.phone, "");
    assert_eq!(input.address, "");
}
