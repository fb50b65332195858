//! Payloads shared by several endpoints.

use serde::{Deserialize, Serialize};

/// Plain acknowledgement returned by delete and update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Treats blank query-string values as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialization() {
        let json = serde_json::to_value(MessageResponse::ok("Task task_1 deleted")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Task task_1 deleted");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some("arrive".to_string())), Some("arrive".to_string()));
    }
}
