use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials posted to `/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// New account details posted to `/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Whatever the backend answered with. The body is trusted as-is, only
/// `user` and `message` are ever looked at.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: reqwest::StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Server supplied message, if it is a non-empty string.
    pub fn message(&self) -> Option<&str> {
        match self.body.get("message") {
            Some(Value::String(message)) if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// The opaque user object, `null` when absent.
    pub fn user(&self) -> &Value {
        self.body.get("user").unwrap_or(&Value::Null)
    }
}
