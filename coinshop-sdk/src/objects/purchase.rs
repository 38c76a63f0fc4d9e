//! Purchase request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /api/users/buyCoinPackage`.
///
/// Built only at submission time from the latest host identity and the
/// selected package. `userId` is omitted when the host has not sent one and
/// forwarded as-is otherwise, `null` included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyCoinPackageRequest {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
    #[serde(rename = "packageId")]
    pub package_id: String,
}

/// Error envelope the server may attach to a failed response.
///
/// `message` is usually a string but is accepted with any JSON type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ApiMessage {
    /// Extract a human-readable message from a raw response body.
    ///
    /// Strings are returned as sent and other non-null values in their JSON
    /// text form. Returns `None` for non-JSON bodies, `null` and blank
    /// strings.
    pub fn from_body(body: &str) -> Option<String> {
        let envelope = serde_json::from_str::<ApiMessage>(body).ok()?;
        match envelope.message? {
            Value::Null => None,
            Value::String(message) => Some(message).filter(|m| !m.trim().is_empty()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = BuyCoinPackageRequest {
            user_id: Some(json!("u-1")),
            package_id: "p1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"userId": "u-1", "packageId": "p1"})
        );
    }

    #[test]
    fn test_request_without_user_omits_field() {
        let request = BuyCoinPackageRequest {
            user_id: None,
            package_id: "p1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"packageId": "p1"})
        );
    }

    #[test]
    fn test_explicit_null_user_is_serialized() {
        let request = BuyCoinPackageRequest {
            user_id: Some(Value::Null),
            package_id: "p1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"userId": null, "packageId": "p1"})
        );
    }

    #[test]
    fn test_non_string_message_from_body() {
        assert_eq!(
            ApiMessage::from_body(r#"{"message":402}"#),
            Some("402".to_string())
        );
        assert_eq!(
            ApiMessage::from_body(r#"{"message":{"code":"E1"}}"#),
            Some(r#"{"code":"E1"}"#.to_string())
        );
        assert_eq!(ApiMessage::from_body(r#"{"message":null}"#), None);
    }

    #[test]
    fn test_message_from_body() {
        assert_eq!(
            ApiMessage::from_body(r#"{"message":"card declined"}"#),
            Some("card declined".to_string())
        );
        assert_eq!(ApiMessage::from_body(r#"{"error":"nope"}"#), None);
        assert_eq!(ApiMessage::from_body(r#"{"message":"  "}"#), None);
        assert_eq!(ApiMessage::from_body("<html>bad gateway</html>"), None);
        assert_eq!(ApiMessage::from_body(""), None);
    }
}
