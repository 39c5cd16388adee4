use crate::device::DeviceId;
use serde::{Deserialize, Serialize};

/// Uniform response wrapper shared by every endpoint, success or failure.
///
/// The payload is flattened next to the envelope fields, so a response reads
/// `{"success": true, "message": "...", "deviceId": "...", ...payload}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "deviceId")]
    pub device_id: DeviceId,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload of a failed exchange: nothing beyond the envelope itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NoPayload {}

impl<T> Envelope<T> {
    pub fn success(device_id: DeviceId, message: Option<&str>, payload: T) -> Self {
        Self {
            success: true,
            message: message.map(str::to_string),
            device_id,
            payload,
        }
    }
}

impl Envelope<NoPayload> {
    pub fn failure(device_id: DeviceId, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            device_id,
            payload: NoPayload {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        confidence: f64,
    }

    #[test]
    fn flattens_payload_next_to_envelope_fields() {
        let env = Envelope::success(
            DeviceId::from_header(Some(b"d1")),
            Some("готово"),
            Sample { confidence: 0.5 },
        );
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"success": true, "message": "готово", "deviceId": "d1", "confidence": 0.5})
        );
    }

    #[test]
    fn failure_has_exactly_three_fields() {
        let env = Envelope::failure(DeviceId::unknown(), "ошибка");
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"success": false, "message": "ошибка", "deviceId": "unknown"})
        );
    }

    #[test]
    fn omits_missing_message() {
        let env = Envelope::success(DeviceId::unknown(), None, Sample { confidence: 1.0 });
        let value = serde_json::to_value(&env).unwrap();
        assert!(value.get("message").is_none());
    }
}
