//! Helpers shared between the page and the `cli` package.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps the submit flow free of Leptos signals and browser APIs so it can
//! run natively under tests and in the terminal client.

pub mod auth_flow;
