//! Error Types
//!
//! Failures of calls to the task collaborator.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// HTTP 404
    #[error("not found")]
    NotFound { message: Option<String> },
    /// Any other non-success status
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
    /// Request body could not be serialized
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build an error from a non-success response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_detail(body);
        if status == 404 {
            Self::NotFound { message }
        } else {
            Self::Status { status, message }
        }
    }

    /// Collaborator-provided message, if the response carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::NotFound { message } | Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }

    /// Detail text if present, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Only transport failures are worth retrying
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Pull `detail` out of an error body.
///
/// `detail` is either a string or a list of `{ "msg": ... }` objects; list
/// messages are joined with "; ".
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_string_detail_is_kept_verbatim() {
        let err = ApiError::from_response(400, r#"{"detail":"No update data provided"}"#);
        assert_eq!(
            err,
            ApiError::Status { status: 400, message: Some("No update data provided".into()) }
        );
        assert_eq!(err.user_message("Failed to update task"), "No update data provided");
    }

    #[test]
    fn test_validation_list_detail_is_joined() {
        let body = r#"{"detail":[
            {"loc":["body","title"],"msg":"String should have at least 3 characters","type":"string_too_short"},
            {"loc":["body","description"],"msg":"Field required","type":"missing"}
        ]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(
            err.detail(),
            Some("String should have at least 3 characters; Field required")
        );
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let err = ApiError::from_response(404, r#"{"detail":"Task with ID x not found"}"#);
        assert!(err.is_not_found());
        assert_eq!(err.detail(), Some("Task with ID x not found"));
    }

    #[test]
    fn test_missing_detail_uses_fallback() {
        let err = ApiError::from_response(500, "Internal Server Error");
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Failed to update task"), "Failed to update task");
        assert!(!err.is_transient());
        assert!(ApiError::Network("offline".into()).is_transient());
    }
}
