//! Native client trait for in-process callers
//!
//! The device identifier and credentials are resolved by the implementation;
//! callers only supply what is request-specific (the site id).

use super::error::NotificationsError;
use super::model::{NotificationSettings, OtherSettings, SiteSettings, WordPressComSetting};
use async_trait::async_trait;

/// Notification settings API for the default WordPress.com account
#[async_trait]
pub trait NotificationSettingsApi: Send + Sync {
    /// All settings for the default account
    async fn get_all_settings(&self) -> Result<NotificationSettings, NotificationsError>;

    /// Settings for a specific site, in backend order
    async fn get_site_settings(
        &self,
        site_id: u64,
    ) -> Result<Vec<SiteSettings>, NotificationsError>;

    /// Site-independent preference groups
    async fn get_other_settings(&self) -> Result<Vec<OtherSettings>, NotificationsError>;

    /// Global WordPress.com entries
    async fn get_wordpress_com_settings(
        &self,
    ) -> Result<Vec<WordPressComSetting>, NotificationsError>;
}
