//! Remote transport trait for notification settings
//!
//! Implementations own the wire schema (verb, URL, JSON shape) and hand back
//! decoded, still wire-shaped payloads. The REST implementation lives in
//! infra/remote.

use super::account::Transport;
use crate::contract::{
    RemoteError, RemoteNotificationSettings, RemoteOtherSettings, RemoteSiteSettings,
    RemoteWordPressComSetting,
};
use async_trait::async_trait;

#[async_trait]
pub trait NotificationsRemote: Send + Sync {
    /// Full settings envelope for the account behind `transport`
    async fn get_all_settings(
        &self,
        transport: &Transport,
        device_id: &str,
    ) -> Result<RemoteNotificationSettings, RemoteError>;

    /// Site settings as returned for `site_id`
    async fn get_site_settings(
        &self,
        transport: &Transport,
        device_id: &str,
        site_id: u64,
    ) -> Result<Vec<RemoteSiteSettings>, RemoteError>;

    /// Site-independent streams
    async fn get_other_settings(
        &self,
        transport: &Transport,
        device_id: &str,
    ) -> Result<Vec<RemoteOtherSettings>, RemoteError>;

    /// Global WordPress.com entries
    async fn get_wordpress_com_settings(
        &self,
        transport: &Transport,
    ) -> Result<Vec<RemoteWordPressComSetting>, RemoteError>;
}
