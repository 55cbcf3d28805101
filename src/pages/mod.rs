//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The page owns form orchestration and delegates notification rendering
//! to `components`.

pub mod auth;
