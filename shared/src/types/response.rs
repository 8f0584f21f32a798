//! API response envelope

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
///
/// Every response body is either `{status: "success", data}` or
/// `{status: "error", message}`; validation failures may add `details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Outcome of the request
    pub status: ResponseStatus,

    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Field-level error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            message: None,
            details: None,
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl ApiResponse<()> {
    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            message: Some(message.into()),
            details: None,
        }
    }

    /// Attach field-level details to an error response
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Response status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let body = serde_json::to_value(ApiResponse::success(json!({"id": 1}))).unwrap();
        assert_eq!(body, json!({"status": "success", "data": {"id": 1}}));
    }

    #[test]
    fn test_error_shape() {
        let body = serde_json::to_value(ApiResponse::error("Todo not found")).unwrap();
        assert_eq!(body, json!({"status": "error", "message": "Todo not found"}));
    }

    #[test]
    fn test_error_with_details() {
        let response = ApiResponse::error("Validation failed")
            .with_details(json!({"email": ["invalid"]}));
        let body = serde_json::to_value(response).unwrap();
        assert_eq!(body["details"]["email"][0], "invalid");
    }
}
