use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  a@b.com  ", " pw "),
        Ok(("a@b.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_identifier() {
    assert_eq!(
        validate_login_input("   ", "pw"),
        Err("Enter both username/email and password.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("admin", ""),
        Err("Enter both username/email and password.")
    );
}
