//! The `{id, message}` body returned by write endpoints and by 404s.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self { id: Some(id), message: message.into() }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self { id: None, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_fields_are_omitted() {
        let body = serde_json::to_value(MessageResponse::message("Photo not found")).unwrap();
        assert_eq!(body, json!({ "message": "Photo not found" }));

        let body = serde_json::to_value(MessageResponse::new(4, "")).unwrap();
        assert_eq!(body, json!({ "id": 4 }));
    }

    #[test]
    fn id_and_message_are_both_emitted() {
        let body = serde_json::to_value(MessageResponse::new(1, "Photo created successfully")).unwrap();
        assert_eq!(body, json!({ "id": 1, "message": "Photo created successfully" }));
    }
}
