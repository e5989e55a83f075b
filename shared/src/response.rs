//! API Response types
//!
//! Envelope structures returned by the restaurant backend.

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// Every mutating and listing endpoint answers with this shape:
/// ```json
/// {
///     "success": true,
///     "message": "Item added",
///     "data": [ ... ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the backend accepted the request
    pub success: bool,
    /// Human-readable message (usually present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Message carried by the envelope, ignoring blank strings
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Category listing response
///
/// The categories endpoint does not nest its payload under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields() {
        let resp: ApiResponse<Vec<String>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.data.is_none());
        assert!(resp.message().is_none());
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let resp: ApiResponse<()> =
            serde_json::from_str(r#"{"success":false,"message":"   "}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message(), None);
    }

    #[test]
    fn test_success_flag_is_required() {
        let resp = serde_json::from_str::<ApiResponse<()>>(r#"{"message":"hi"}"#);
        assert!(resp.is_err());
    }
}
