use super::*;

#[test]
fn validate_sign_in_input_trims_email() {
    assert_eq!(
        validate_sign_in_input("  avery@example.com  ", "hunter2"),
        Ok(("avery@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_email() {
    assert_eq!(
        validate_sign_in_input("   ", "hunter2"),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_sign_in_input_requires_password() {
    assert_eq!(
        validate_sign_in_input("avery@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_sign_in_input_keeps_password_untrimmed() {
    assert_eq!(
        validate_sign_in_input("a@b.com", " spaced "),
        Ok(("a@b.com".to_owned(), " spaced ".to_owned()))
    );
}
