//! Module wiring: configuration, transport, service and client surfaces

use crate::api::native::{CallbackClient, NativeClient};
use crate::config::Config;
use crate::contract::NotificationSettingsApi;
use crate::domain::{AccountStore, DeviceRegistry, NotificationsRemote, Service};
use crate::infra::RestNotificationsRemote;
use anyhow::Result;
use std::sync::Arc;

/// Notification settings module
pub struct NotificationSettingsModule {
    config: Config,
    service: Arc<Service>,
}

impl NotificationSettingsModule {
    /// Build the module on top of the WordPress.com REST transport
    pub fn init(
        config: Config,
        accounts: Arc<dyn AccountStore>,
        devices: Arc<dyn DeviceRegistry>,
    ) -> Result<Self> {
        let config = config.validate()?;
        let remote = Arc::new(RestNotificationsRemote::new(&config)?);

        tracing::info!(
            api_base_url = %config.api_base_url,
            request_timeout = ?config.request_timeout,
            "Notification settings module initialized"
        );
        Ok(Self::with_remote(config, accounts, devices, remote))
    }

    /// Build the module on top of a caller-supplied transport
    pub fn with_remote(
        config: Config,
        accounts: Arc<dyn AccountStore>,
        devices: Arc<dyn DeviceRegistry>,
        remote: Arc<dyn NotificationsRemote>,
    ) -> Self {
        let service = Arc::new(Service::new(accounts, devices, remote));
        Self { config, service }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Async client for in-process callers
    pub fn client(&self) -> Arc<dyn NotificationSettingsApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// Callback client; calls must be made from within a tokio runtime
    pub fn callbacks(&self) -> CallbackClient {
        CallbackClient::new(self.client())
    }
}
