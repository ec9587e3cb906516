//! Tagged message envelope shared by all channels.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tagged message as carried on every channel.
///
/// `kind` is a dot-delimited path (serialized as `type` for wire
/// compatibility) used purely as a lookup key; `data` is handler-specific
/// and opaque at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Dotted message kind, e.g. `"wallet.infos.success"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Handler-specific payload. Absent on the wire means null.
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Create an envelope with no payload.
    pub fn bare(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: Value::Null,
        }
    }

    /// Create an envelope with a payload.
    pub fn with_data(kind: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_wire_field_is_type() {
        let env = Envelope::with_data("device.add", json!({"path": "p1"}));
        let wire = serde_json::to_value(&env).unwrap();
        assert_eq!(wire["type"], "device.add");
        assert_eq!(wire["data"]["path"], "p1");
    }

    #[test]
    fn test_envelope_missing_data_defaults_to_null() {
        let env: Envelope = serde_json::from_str(r#"{"type":"updater.checking"}"#).unwrap();
        assert_eq!(env.kind, "updater.checking");
        assert_eq!(env.data, Value::Null);
    }
}
