use super::*;

#[test]
fn validate_registration_builds_a_trimmed_request() {
    let request = validate_registration(
        " newuser ",
        " new@example.com ",
        "longenough",
        "longenough",
        "ADMIN",
    )
    .expect("valid");
    assert_eq!(request.username, "newuser");
    assert_eq!(request.email, "new@example.com");
    assert_eq!(request.role, "ADMIN");
}

#[test]
fn validate_registration_requires_all_fields() {
    assert_eq!(
        validate_registration("", "a@b.com", "longenough", "longenough", ROLES[0]),
        Err("All fields are required.")
    );
}

#[test]
fn validate_registration_rejects_mismatched_passwords() {
    assert_eq!(
        validate_registration("u", "a@b.com", "longenough", "different", ROLES[0]),
        Err("Passwords do not match")
    );
}

#[test]
fn validate_registration_rejects_short_passwords() {
    assert_eq!(
        validate_registration("u", "a@b.com", "short", "short", ROLES[0]),
        Err("Password must be at least 8 characters long")
    );
}

#[test]
fn validate_registration_rejects_invalid_email() {
    assert_eq!(
        validate_registration("u", "not-an-email", "longenough", "longenough", ROLES[0]),
        Err("Enter a valid email address.")
    );
}
