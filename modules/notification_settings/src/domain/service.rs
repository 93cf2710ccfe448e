//! Domain service - resolves the transport, issues one remote call and
//! translates the payload

use super::account::{AccountStore, Transport, TransportResolver};
use super::device::DeviceRegistry;
use super::remote::NotificationsRemote;
use super::translate;
use crate::contract::{
    NotificationSettings, NotificationsError, OtherSettings, SiteSettings, WordPressComSetting,
};
use std::sync::Arc;

/// Notification settings gateway for the default account
pub struct Service {
    resolver: TransportResolver,
    devices: Arc<dyn DeviceRegistry>,
    remote: Arc<dyn NotificationsRemote>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        devices: Arc<dyn DeviceRegistry>,
        remote: Arc<dyn NotificationsRemote>,
    ) -> Self {
        Self {
            resolver: TransportResolver::new(accounts),
            devices,
            remote,
        }
    }

    /// All settings for the default account
    pub async fn get_all_settings(&self) -> Result<NotificationSettings, NotificationsError> {
        let transport = self.transport("get_all_settings").await?;
        let device_id = self.devices.current_device_id();
        tracing::debug!(
            operation = "get_all_settings",
            has_device = !device_id.is_empty(),
            "Dispatching notification settings request"
        );

        let remote = self.remote.get_all_settings(&transport, &device_id).await?;
        Ok(translate::translate_account_settings(remote))
    }

    /// Settings for a specific site
    pub async fn get_site_settings(
        &self,
        site_id: u64,
    ) -> Result<Vec<SiteSettings>, NotificationsError> {
        let transport = self.transport("get_site_settings").await?;
        let device_id = self.devices.current_device_id();
        tracing::debug!(
            operation = "get_site_settings",
            site_id,
            has_device = !device_id.is_empty(),
            "Dispatching notification settings request"
        );

        let remote = self
            .remote
            .get_site_settings(&transport, &device_id, site_id)
            .await?;
        Ok(translate::translate_site_settings(remote))
    }

    /// Site-independent preference groups
    pub async fn get_other_settings(&self) -> Result<Vec<OtherSettings>, NotificationsError> {
        let transport = self.transport("get_other_settings").await?;
        let device_id = self.devices.current_device_id();
        tracing::debug!(
            operation = "get_other_settings",
            has_device = !device_id.is_empty(),
            "Dispatching notification settings request"
        );

        let remote = self.remote.get_other_settings(&transport, &device_id).await?;
        Ok(translate::translate_other_settings(remote))
    }

    /// Global WordPress.com entries; not keyed by device
    pub async fn get_wordpress_com_settings(
        &self,
    ) -> Result<Vec<WordPressComSetting>, NotificationsError> {
        let transport = self.transport("get_wordpress_com_settings").await?;
        tracing::debug!(
            operation = "get_wordpress_com_settings",
            "Dispatching notification settings request"
        );

        let remote = self.remote.get_wordpress_com_settings(&transport).await?;
        Ok(translate::translate_platform_settings(remote))
    }

    // Checked before any network call; no transport means nothing is dispatched.
    async fn transport(&self, operation: &'static str) -> Result<Transport, NotificationsError> {
        self.resolver.resolve().await.ok_or_else(|| {
            tracing::debug!(
                operation,
                "No authenticated account, request not dispatched"
            );
            NotificationsError::Unauthenticated
        })
    }
}
