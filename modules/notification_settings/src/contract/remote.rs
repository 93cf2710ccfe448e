//! Wire-shaped notification settings payloads
//!
//! These mirror the WordPress.com `me/notifications/settings` response as
//! received. Preference values stay loosely typed (`serde_json::Value`);
//! interpretation happens in the domain translator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw category key to value map, in the order the backend sent the keys
pub type RemoteFlags = Map<String, Value>;

/// Key carrying the device identifier inside a device stream
pub const DEVICE_ID_KEY: &str = "device_id";

/// Full settings envelope for the default account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteNotificationSettings {
    #[serde(default)]
    pub blogs: Vec<RemoteSiteSettings>,
    #[serde(default)]
    pub other: Option<RemoteStreams>,
    #[serde(default)]
    pub wpcom: Option<RemoteFlags>,
}

/// Channel streams as nested in the envelope (`timeline`, `email`, `devices`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteStreams {
    #[serde(default)]
    pub timeline: Option<RemoteFlags>,
    #[serde(default)]
    pub email: Option<RemoteFlags>,
    #[serde(default)]
    pub devices: Option<Vec<RemoteFlags>>,
}

impl RemoteStreams {
    /// Flatten into the ordered stream list: timeline, email, then devices.
    pub fn into_streams(self) -> Vec<RemoteStream> {
        let mut streams = Vec::new();
        if let Some(flags) = self.timeline {
            streams.push(RemoteStream::new(RemoteStreamKind::Timeline, flags));
        }
        if let Some(flags) = self.email {
            streams.push(RemoteStream::new(RemoteStreamKind::Email, flags));
        }
        streams.extend(
            self.devices
                .unwrap_or_default()
                .into_iter()
                .map(|flags| RemoteStream::new(RemoteStreamKind::Device, flags)),
        );
        streams
    }
}

/// Per-site settings entry of the `blogs` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSiteSettings {
    pub blog_id: u64,
    #[serde(flatten)]
    pub streams: RemoteStreams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteStreamKind {
    Timeline,
    Email,
    Device,
}

/// A single channel's raw preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteStream {
    pub kind: RemoteStreamKind,
    pub flags: RemoteFlags,
}

impl RemoteStream {
    pub fn new(kind: RemoteStreamKind, flags: RemoteFlags) -> Self {
        Self { kind, flags }
    }
}

/// Entry of the `other` sequence
pub type RemoteOtherSettings = RemoteStream;

/// Entry of the flattened `wpcom` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteWordPressComSetting {
    pub key: String,
    pub value: Value,
}

impl RemoteWordPressComSetting {
    /// Flatten the `wpcom` object, dropping values that are not flags.
    pub fn from_flags(flags: RemoteFlags) -> Vec<Self> {
        flags
            .into_iter()
            .filter(|(_, value)| as_flag(value).is_some())
            .map(|(key, value)| Self { key, value })
            .collect()
    }
}

/// Interpret a loosely typed wire value as a boolean flag.
///
/// Accepts booleans, numbers (non-zero is `true`) and the strings
/// `"true"`/`"false"`/`"1"`/`"0"`. Anything else is not a flag.
pub fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_flag_accepts_loose_values() {
        assert_eq!(as_flag(&json!(true)), Some(true));
        assert_eq!(as_flag(&json!(0)), Some(false));
        assert_eq!(as_flag(&json!(1)), Some(true));
        assert_eq!(as_flag(&json!("false")), Some(false));
        assert_eq!(as_flag(&json!("1")), Some(true));
        assert_eq!(as_flag(&json!("yes")), None);
        assert_eq!(as_flag(&json!(null)), None);
        assert_eq!(as_flag(&json!({"nested": true})), None);
    }

    #[test]
    fn test_streams_flatten_in_wire_order() {
        let streams: RemoteStreams = serde_json::from_value(json!({
            "email": {"comment_like": true},
            "devices": [
                {"device_id": 11, "comment_like": false},
                {"device_id": 12, "comment_like": true}
            ],
            "timeline": {"comment_like": true}
        }))
        .unwrap();

        let kinds: Vec<_> = streams.into_streams().into_iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RemoteStreamKind::Timeline,
                RemoteStreamKind::Email,
                RemoteStreamKind::Device,
                RemoteStreamKind::Device,
            ]
        );
    }

    #[test]
    fn test_site_settings_decode_ignores_unknown_fields() {
        let site: RemoteSiteSettings = serde_json::from_value(json!({
            "blog_id": 42,
            "timeline": {"new_comment": true},
            "site_name": "ignored"
        }))
        .unwrap();

        assert_eq!(site.blog_id, 42);
        assert!(site.streams.email.is_none());
        assert_eq!(site.streams.timeline.unwrap()["new_comment"], json!(true));
    }

    #[test]
    fn test_wpcom_flatten_drops_non_flags_in_wire_order() {
        let flags: RemoteFlags = serde_json::from_str(
            r#"{"research": "1", "label": "Newsletter", "marketing": false, "community": true}"#,
        )
        .unwrap();

        let entries = RemoteWordPressComSetting::from_flags(flags);

        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["research", "marketing", "community"]);
    }
}
