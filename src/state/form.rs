//! Credential form state and submission gating.
//!
//! DESIGN
//! ======
//! A field is valid when it is non-empty; no trimming and no format checks.
//! `begin_submit` is the only way to obtain `Credentials` for a request, so
//! the validation and busy checks cannot be bypassed by a caller.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::Credentials;

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";

/// Why a submission was refused before any request was sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("email and password are required")]
    Incomplete,
    #[error("a request is already in flight")]
    Busy,
}

/// Form fields plus the in-flight flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub submitting: bool,
}

impl FormState {
    pub fn email_error(&self) -> Option<&'static str> {
        self.email.is_empty().then_some(EMAIL_REQUIRED)
    }

    pub fn password_error(&self) -> Option<&'static str> {
        self.password.is_empty().then_some(PASSWORD_REQUIRED)
    }

    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    /// Whether the login/signup buttons should be enabled.
    pub fn can_submit(&self) -> bool {
        self.is_complete() && !self.submitting
    }

    /// Mark a request as in flight and hand out the credentials to send.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::Busy`] while another request is in flight,
    /// and [`SubmitRejected::Incomplete`] when either field is empty. The
    /// state is left untouched in both cases.
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::Busy);
        }
        if !self.is_complete() {
            return Err(SubmitRejected::Incomplete);
        }
        self.submitting = true;
        Ok(Credentials { email: self.email.clone(), password: self.password.clone() })
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
