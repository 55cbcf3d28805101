//! Login status for the current page visit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Flipped by a successful login and read by the page to swap the form for
//! the welcome message. Nothing flips it back; a reload starts anonymous.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

pub const ANONYMOUS_HEADING: &str = "Please Log In or Sign Up";
pub const LOGGED_IN_HEADING: &str = "Welcome!";
pub const LOGGED_IN_MESSAGE: &str = "Congratulations! You're now logged in. Use the application as you see fit.";

/// Authentication state provided to the page via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub logged_in: bool,
}

impl AuthState {
    pub fn heading(self) -> &'static str {
        if self.logged_in { LOGGED_IN_HEADING } else { ANONYMOUS_HEADING }
    }
}
