//! Build-time configuration for the browser bundle.
//!
//! The WASM bundle has no process environment at runtime, so the auth API
//! location is baked in when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Auth API used when `AUTHFORM_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://backengine-oi7c.fly.dev";

/// Auth API base URL compiled into this build.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("AUTHFORM_API_BASE_URL"))
}

fn resolve_base_url(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_API_BASE_URL,
    }
}
