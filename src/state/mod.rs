//! Client-side state for the auth page.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `form`, `toast`) so the page and the
//! notification host can depend on small focused models. All of it is
//! transient and dies with the page.

pub mod auth;
pub mod form;
pub mod toast;
