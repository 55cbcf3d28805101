//! Login/signup submit flow.
//!
//! ERROR HANDLING
//! ==============
//! `perform` never fails. Transport errors and unreadable bodies collapse
//! into `AuthOutcome::Failed`, server-reported errors into
//! `AuthOutcome::Rejected`, and every outcome maps to exactly one notice.
//! The only refusal a caller sees is `SubmitRejected`, raised before any
//! request leaves.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use crate::net::api::{AuthTransport, LOGIN_PATH, SIGNUP_PATH};
use crate::net::types::{Credentials, server_error_message};
use crate::state::auth::AuthState;
use crate::state::form::{FormState, SubmitRejected};
use crate::state::toast::{Notice, ToastState};

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Signup,
}

impl AuthAction {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Signup => SIGNUP_PATH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Signup",
        }
    }

    fn success_notice(self) -> Notice {
        match self {
            Self::Login => Notice::success("Login Successful", "You're now logged in."),
            Self::Signup => Notice::success("Signup Successful", "You're now signed up. Please log in."),
        }
    }

    fn failure_title(self) -> &'static str {
        match self {
            Self::Login => "Login Failed",
            Self::Signup => "Signup Failed",
        }
    }
}

/// Result of one login or signup attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// 2xx from the auth API.
    Succeeded(AuthAction),
    /// Non-2xx with a readable JSON body.
    Rejected { action: AuthAction, message: String },
    /// No response, or a body that could not be read as JSON.
    Failed(AuthAction),
}

impl AuthOutcome {
    pub fn action(&self) -> AuthAction {
        match self {
            Self::Succeeded(action) | Self::Failed(action) => *action,
            Self::Rejected { action, .. } => *action,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Apply the state transition: only a successful login logs the user in.
    pub fn apply(&self, auth: &mut AuthState) {
        if matches!(self, Self::Succeeded(AuthAction::Login)) {
            auth.logged_in = true;
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            Self::Succeeded(action) => action.success_notice(),
            Self::Rejected { action, message } => Notice::error(action.failure_title(), message.clone()),
            Self::Failed(action) => Notice::error(action.failure_title(), UNEXPECTED_ERROR),
        }
    }
}

fn rejection_message(body: &serde_json::Value, status: u16) -> String {
    server_error_message(body).map_or_else(|| format!("Request failed with status {status}"), str::to_owned)
}

/// Send one login or signup request and classify the response.
///
/// Login reads the body as JSON before looking at the status, so a 2xx
/// with a non-JSON body counts as a failure. Signup only reads the body
/// when the status is not 2xx.
pub async fn perform<T: AuthTransport>(transport: &T, action: AuthAction, credentials: &Credentials) -> AuthOutcome {
    log::debug!("{} request dispatched", action.label());
    let response = match transport.post_json(action.path(), credentials).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("{} request failed: {e}", action.label());
            return AuthOutcome::Failed(action);
        }
    };

    if action == AuthAction::Signup && response.ok() {
        return AuthOutcome::Succeeded(action);
    }

    let body = match response.json() {
        Ok(body) => body,
        Err(e) => {
            log::warn!("{} response with status {} was not JSON: {e}", action.label(), response.status);
            return AuthOutcome::Failed(action);
        }
    };

    if response.ok() {
        AuthOutcome::Succeeded(action)
    } else {
        AuthOutcome::Rejected { action, message: rejection_message(&body, response.status) }
    }
}

/// Owned form, auth and notification state driven by one transport.
///
/// The page keeps the same pieces in signals and calls the same steps;
/// this type bundles them for the terminal client and for tests.
pub struct AuthSession<T> {
    transport: T,
    pub form: FormState,
    pub auth: AuthState,
    pub toasts: ToastState,
}

impl<T: AuthTransport> AuthSession<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, form: FormState::default(), auth: AuthState::default(), toasts: ToastState::default() }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run `action` with the current form contents.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected`] without touching the network when a
    /// field is empty or a request is already in flight.
    pub async fn submit(&mut self, action: AuthAction) -> Result<AuthOutcome, SubmitRejected> {
        let credentials = self.form.begin_submit()?;
        let outcome = perform(&self.transport, action, &credentials).await;
        self.form.finish_submit();
        outcome.apply(&mut self.auth);
        self.toasts.push(outcome.notice());
        Ok(outcome)
    }
}
