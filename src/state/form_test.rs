use super::*;

fn filled(email: &str, password: &str) -> FormState {
    FormState { email: email.to_owned(), password: password.to_owned(), submitting: false }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_form_reports_both_errors() {
    let form = FormState::default();
    assert_eq!(form.email_error(), Some("Email is required."));
    assert_eq!(form.password_error(), Some("Password is required."));
    assert!(!form.can_submit());
}

#[test]
fn whitespace_counts_as_content() {
    let form = filled(" ", " ");
    assert_eq!(form.email_error(), None);
    assert_eq!(form.password_error(), None);
    assert!(form.can_submit());
}

#[test]
fn email_shape_is_not_checked() {
    assert!(filled("not-an-email", "x").can_submit());
}

#[test]
fn busy_form_cannot_submit() {
    let mut form = filled("a@b.com", "x");
    form.submitting = true;
    assert!(form.is_complete());
    assert!(!form.can_submit());
}

// =============================================================
// begin_submit / finish_submit
// =============================================================

#[test]
fn begin_submit_hands_out_verbatim_credentials() {
    let mut form = filled(" a@b.com", "x ");
    let creds = form.begin_submit().unwrap();
    assert_eq!(creds, Credentials { email: " a@b.com".to_owned(), password: "x ".to_owned() });
    assert!(form.submitting);
}

#[test]
fn begin_submit_rejects_missing_email() {
    let mut form = filled("", "x");
    assert_eq!(form.begin_submit(), Err(SubmitRejected::Incomplete));
    assert!(!form.submitting);
}

#[test]
fn begin_submit_rejects_missing_password() {
    let mut form = filled("a@b.com", "");
    assert_eq!(form.begin_submit(), Err(SubmitRejected::Incomplete));
    assert!(!form.submitting);
}

#[test]
fn begin_submit_rejects_while_busy() {
    let mut form = filled("a@b.com", "x");
    form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(SubmitRejected::Busy));
    assert!(form.submitting);
}

#[test]
fn finish_submit_clears_busy_flag() {
    let mut form = filled("a@b.com", "x");
    form.begin_submit().unwrap();
    form.finish_submit();
    assert!(!form.submitting);
    assert!(form.can_submit());
}
