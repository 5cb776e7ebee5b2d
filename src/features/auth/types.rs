//! Request and response payloads for the sign-in and sign-up endpoints. The
//! request carries a plaintext password, so it must never be logged.
//!
//! Responses are read loosely: a 2xx body of any shape is accepted and only the
//! one field each flow depends on is inspected for a usable value.

use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginResponse {
    token: Option<String>,
}

impl LoginResponse {
    /// Reads `token` from any 2xx body. Strings and numbers count when truthy.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        let token = body.get("token").filter(|value| is_truthy(value)).and_then(|value| match value {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        });
        Self { token }
    }

    /// The token, if the server returned a usable one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterResponse {
    /// Numeric on reqres, but any truthy value is accepted.
    id: Option<Value>,
}

impl RegisterResponse {
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        Self {
            id: body.get("id").cloned(),
        }
    }

    /// Whether the server acknowledged the account with a usable id.
    #[must_use]
    pub fn has_id(&self) -> bool {
        self.id.as_ref().is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
