//! Wire payload to domain model translation
//!
//! Pure and total: every decoded payload maps to exactly one domain value,
//! sequences keep their length and order. Values that are not flags are
//! dropped from preference maps.

use crate::contract::remote::{as_flag, DEVICE_ID_KEY};
use crate::contract::{
    Channel, NotificationSettings, OtherSettings, Preferences, RemoteFlags,
    RemoteNotificationSettings, RemoteOtherSettings, RemoteSiteSettings, RemoteStream,
    RemoteStreamKind, RemoteWordPressComSetting, SiteSettings, Stream, WordPressComSetting,
};
use serde_json::Value;

pub fn translate_account_settings(remote: RemoteNotificationSettings) -> NotificationSettings {
    remote.into()
}

pub fn translate_site_settings(remote: Vec<RemoteSiteSettings>) -> Vec<SiteSettings> {
    remote.into_iter().map(SiteSettings::from).collect()
}

pub fn translate_other_settings(remote: Vec<RemoteOtherSettings>) -> Vec<OtherSettings> {
    remote.into_iter().map(Stream::from).collect()
}

pub fn translate_platform_settings(
    remote: Vec<RemoteWordPressComSetting>,
) -> Vec<WordPressComSetting> {
    remote.into_iter().map(WordPressComSetting::from).collect()
}

// ===== Conversions =====

impl From<RemoteNotificationSettings> for NotificationSettings {
    fn from(remote: RemoteNotificationSettings) -> Self {
        Self {
            sites: translate_site_settings(remote.blogs),
            other: translate_other_settings(
                remote.other.map(|o| o.into_streams()).unwrap_or_default(),
            ),
            wordpress_com: translate_platform_settings(
                remote
                    .wpcom
                    .map(RemoteWordPressComSetting::from_flags)
                    .unwrap_or_default(),
            ),
        }
    }
}

impl From<RemoteSiteSettings> for SiteSettings {
    fn from(remote: RemoteSiteSettings) -> Self {
        Self {
            site_id: remote.blog_id,
            streams: remote
                .streams
                .into_streams()
                .into_iter()
                .map(Stream::from)
                .collect(),
        }
    }
}

impl From<RemoteStream> for Stream {
    fn from(remote: RemoteStream) -> Self {
        let mut flags = remote.flags;
        let channel = match remote.kind {
            RemoteStreamKind::Timeline => Channel::Timeline,
            RemoteStreamKind::Email => Channel::Email,
            RemoteStreamKind::Device => Channel::Device {
                device_id: flags.remove(DEVICE_ID_KEY).and_then(device_id),
            },
        };

        Self {
            channel,
            preferences: preferences(flags),
        }
    }
}

impl From<RemoteWordPressComSetting> for WordPressComSetting {
    fn from(remote: RemoteWordPressComSetting) -> Self {
        Self {
            enabled: as_flag(&remote.value).unwrap_or(false),
            key: remote.key,
        }
    }
}

fn preferences(flags: RemoteFlags) -> Preferences {
    flags
        .into_iter()
        .filter_map(|(key, value)| as_flag(&value).map(|enabled| (key, enabled)))
        .collect()
}

fn device_id(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
