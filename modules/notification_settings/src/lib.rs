//! Notification Settings Module
//!
//! Fetches the default WordPress.com account's notification preferences and
//! translates the wire payloads into typed domain settings: per-site,
//! "other" (site-independent) and WordPress.com-wide.

// Public exports
pub mod contract;
pub use contract::{
    Channel, NotificationSettings, NotificationSettingsApi, NotificationsError, OtherSettings,
    Preferences, RemoteError, SiteSettings, Stream, WordPressComSetting,
};

pub mod module;
pub use module::NotificationSettingsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
pub use api::native::CallbackClient;

#[doc(hidden)]
pub mod config;
pub use config::Config;

#[doc(hidden)]
pub mod domain;
pub use domain::{Account, AccountStore, DeviceRegistry, NotificationsRemote, Transport};

#[doc(hidden)]
pub mod infra;
pub use infra::{RestNotificationsRemote, StaticAccountStore, StaticDeviceRegistry};
