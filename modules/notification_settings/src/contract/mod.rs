//! Contract layer - public API for in-process callers
//!
//! Domain models and the native client trait, plus the wire-shaped payloads
//! exchanged with the remote transport.

pub mod client;
pub mod error;
pub mod model;
pub mod remote;

pub use client::NotificationSettingsApi;
pub use error::{NotificationsError, RemoteError};
pub use model::{
    Channel, NotificationSettings, OtherSettings, Preferences, SiteSettings, Stream,
    WordPressComSetting,
};
pub use remote::{
    RemoteFlags, RemoteNotificationSettings, RemoteOtherSettings, RemoteSiteSettings, RemoteStream,
    RemoteStreamKind, RemoteStreams, RemoteWordPressComSetting,
};
