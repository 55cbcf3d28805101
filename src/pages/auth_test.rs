use super::*;

#[test]
fn field_class_marks_invalid_fields() {
    assert_eq!(field_class(false), "auth-field");
    assert_eq!(field_class(true), "auth-field auth-field--invalid");
}

#[test]
fn button_label_reflects_busy_state() {
    assert_eq!(button_label(AuthAction::Login, false), "Login");
    assert_eq!(button_label(AuthAction::Login, true), "Logging in...");
    assert_eq!(button_label(AuthAction::Signup, false), "Signup");
    assert_eq!(button_label(AuthAction::Signup, true), "Signing up...");
}
