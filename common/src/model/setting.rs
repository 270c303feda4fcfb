//! Envelope types for the generic settings endpoints.
//!
//! The backend stores single named configuration values; reads come back
//! wrapped in `{ success, data: { setting_value } }` and writes reply with
//! `{ success, message? }`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingData {
    pub setting_value: String,
}

/// Reply to `GET /settings/{key}`. `data` is absent when the key has never
/// been written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<SettingData>,
}

/// Body of `PUT /settings/{key}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingUpdate {
    pub value: String,
}

/// Reply to `PUT /settings/{key}`. `message` carries the backend's reason
/// when `success` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingSaveResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_populated_read_envelope() {
        let payload = r#"{
            "success": true,
            "data": { "setting_value": "https://youtu.be/dQw4w9WgXcQ" }
        }"#;

        let envelope: SettingResponse = serde_json::from_str(payload).unwrap();
        assert!(envelope.success);
        assert_eq!(
            envelope.data.unwrap().setting_value,
            "https://youtu.be/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn parses_a_read_envelope_without_data() {
        let envelope: SettingResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn update_body_serializes_as_a_value_field() {
        let body = SettingUpdate {
            value: "https://youtu.be/dQw4w9WgXcQ".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"value":"https://youtu.be/dQw4w9WgXcQ"}"#
        );
    }

    #[test]
    fn save_reply_message_is_optional() {
        let ok: SettingSaveResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);
        assert!(ok.message.is_none());

        let rejected: SettingSaveResponse =
            serde_json::from_str(r#"{"success": false, "message": "value too long"}"#).unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.message.as_deref(), Some("value too long"));
    }
}
