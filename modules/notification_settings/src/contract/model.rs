//! Contract models for notification settings
//!
//! These models are transport-agnostic and handed to callers as-is.
//! NO serde derives - these are pure domain models.

use std::collections::BTreeMap;

/// Category key (e.g. `new_comment`, `comment_like`) to enabled flag
pub type Preferences = BTreeMap<String, bool>;

/// Delivery channel for a group of notification preferences
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Notifications tab inside the app / web reader
    Timeline,
    /// Email delivery
    Email,
    /// Push delivery to a registered device
    Device {
        /// Device identifier as reported by the backend, if any
        device_id: Option<String>,
    },
}

impl Channel {
    pub fn is_device(&self) -> bool {
        matches!(self, Self::Device { .. })
    }
}

/// Preferences for a single delivery channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    pub channel: Channel,
    pub preferences: Preferences,
}

impl Stream {
    /// Look up a single category flag
    pub fn is_enabled(&self, category: &str) -> Option<bool> {
        self.preferences.get(category).copied()
    }
}

/// Notification settings for one site the account follows or owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Backend site (blog) identifier
    pub site_id: u64,
    /// Per-channel preferences, in the order the backend reported them
    pub streams: Vec<Stream>,
}

impl SiteSettings {
    /// First stream delivered over the given channel
    pub fn stream(&self, channel: &Channel) -> Option<&Stream> {
        self.streams.iter().find(|s| &s.channel == channel)
    }
}

/// Site-independent preference group ("comments on other sites", etc.)
///
/// One entry per delivery channel.
pub type OtherSettings = Stream;

/// Global WordPress.com entry (marketing, research, community, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPressComSetting {
    pub key: String,
    pub enabled: bool,
}

/// Account-level settings bundle for the default account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSettings {
    pub sites: Vec<SiteSettings>,
    pub other: Vec<OtherSettings>,
    pub wordpress_com: Vec<WordPressComSetting>,
}

impl NotificationSettings {
    /// Settings for a specific site, if the backend returned it
    pub fn site(&self, site_id: u64) -> Option<&SiteSettings> {
        self.sites.iter().find(|s| s.site_id == site_id)
    }
}
