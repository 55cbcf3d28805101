//! Wire DTOs for the auth API.
//!
//! Both endpoints take the same request body and answer with free-form JSON.
//! Only the `error` field of a failure body is interpreted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials forwarded verbatim as `{"email": ..., "password": ...}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Extract the server-supplied `error` string from a failure body.
///
/// Returns `None` when the body is not an object or `error` is not a string.
pub fn server_error_message(body: &Value) -> Option<&str> {
    body.get("error").and_then(Value::as_str)
}
