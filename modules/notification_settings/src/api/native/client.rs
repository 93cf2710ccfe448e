//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    NotificationSettings, NotificationSettingsApi, NotificationsError, OtherSettings, SiteSettings,
    WordPressComSetting,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl NotificationSettingsApi for NativeClient {
    async fn get_all_settings(&self) -> Result<NotificationSettings, NotificationsError> {
        self.service.get_all_settings().await
    }

    async fn get_site_settings(
        &self,
        site_id: u64,
    ) -> Result<Vec<SiteSettings>, NotificationsError> {
        self.service.get_site_settings(site_id).await
    }

    async fn get_other_settings(&self) -> Result<Vec<OtherSettings>, NotificationsError> {
        self.service.get_other_settings().await
    }

    async fn get_wordpress_com_settings(
        &self,
    ) -> Result<Vec<WordPressComSetting>, NotificationsError> {
        self.service.get_wordpress_com_settings().await
    }
}
