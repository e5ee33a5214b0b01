//! Shared response envelope for API handlers.
//!
//! Every successful response uses `{ "message", "data", "error": false }`.
//! Use [`ApiResponse`] instead of ad-hoc `serde_json::json!` bodies to get
//! compile-time type safety and consistent serialization. Failure shapes
//! live in [`crate::error`].

use serde::Serialize;

/// Standard success envelope.
///
/// `data` is omitted from the JSON when `None` (e.g. after a delete).
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok("Products obtained successfully", products)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub error: bool,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope carrying a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            error: false,
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with no payload.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            error: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ok_envelope_serializes_all_fields() {
        let body = serde_json::to_value(ApiResponse::ok("done", vec![1, 2])).unwrap();
        assert_eq!(body, json!({ "message": "done", "data": [1, 2], "error": false }));
    }

    #[test]
    fn message_only_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::message_only("Deleted successfully")).unwrap();
        assert_eq!(body, json!({ "message": "Deleted successfully", "error": false }));
    }
}
