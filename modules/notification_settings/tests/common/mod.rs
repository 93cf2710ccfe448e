//! Shared fakes for notification settings integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use notification_settings::contract::{
    RemoteError, RemoteNotificationSettings, RemoteOtherSettings, RemoteSiteSettings,
    RemoteWordPressComSetting,
};
use notification_settings::domain::Service;
use notification_settings::{
    Account, NotificationsRemote, StaticAccountStore, StaticDeviceRegistry, Transport,
};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// A remote call as observed by the fake transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    All { device_id: String },
    Site { device_id: String, site_id: u64 },
    Other { device_id: String },
    WordPressCom,
}

/// Recording transport returning scripted payloads
pub struct FakeRemote {
    calls: Mutex<Vec<(Call, String)>>,
    all: Result<RemoteNotificationSettings, RemoteError>,
    sites: Result<Vec<RemoteSiteSettings>, RemoteError>,
    other: Result<Vec<RemoteOtherSettings>, RemoteError>,
    wpcom: Result<Vec<RemoteWordPressComSetting>, RemoteError>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            all: Ok(RemoteNotificationSettings::default()),
            sites: Ok(Vec::new()),
            other: Ok(Vec::new()),
            wpcom: Ok(Vec::new()),
        }
    }

    /// Every category fails with `error`
    pub fn failing(error: RemoteError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            all: Err(error.clone()),
            sites: Err(error.clone()),
            other: Err(error.clone()),
            wpcom: Err(error),
        }
    }

    pub fn with_all(mut self, payload: RemoteNotificationSettings) -> Self {
        self.all = Ok(payload);
        self
    }

    pub fn with_sites(mut self, payload: Vec<RemoteSiteSettings>) -> Self {
        self.sites = Ok(payload);
        self
    }

    pub fn with_other(mut self, payload: Vec<RemoteOtherSettings>) -> Self {
        self.other = Ok(payload);
        self
    }

    pub fn with_wpcom(mut self, payload: Vec<RemoteWordPressComSetting>) -> Self {
        self.wpcom = Ok(payload);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().iter().map(|(call, _)| call.clone()).collect()
    }

    /// Bearer tokens the calls were issued with
    pub fn tokens(&self) -> Vec<String> {
        self.calls.lock().iter().map(|(_, token)| token.clone()).collect()
    }

    fn record(&self, call: Call, transport: &Transport) {
        self.calls
            .lock()
            .push((call, transport.auth_token().to_string()));
    }
}

#[async_trait]
impl NotificationsRemote for FakeRemote {
    async fn get_all_settings(
        &self,
        transport: &Transport,
        device_id: &str,
    ) -> Result<RemoteNotificationSettings, RemoteError> {
        self.record(
            Call::All {
                device_id: device_id.to_string(),
            },
            transport,
        );
        self.all.clone()
    }

    async fn get_site_settings(
        &self,
        transport: &Transport,
        device_id: &str,
        site_id: u64,
    ) -> Result<Vec<RemoteSiteSettings>, RemoteError> {
        self.record(
            Call::Site {
                device_id: device_id.to_string(),
                site_id,
            },
            transport,
        );
        self.sites.clone()
    }

    async fn get_other_settings(
        &self,
        transport: &Transport,
        device_id: &str,
    ) -> Result<Vec<RemoteOtherSettings>, RemoteError> {
        self.record(
            Call::Other {
                device_id: device_id.to_string(),
            },
            transport,
        );
        self.other.clone()
    }

    async fn get_wordpress_com_settings(
        &self,
        transport: &Transport,
    ) -> Result<Vec<RemoteWordPressComSetting>, RemoteError> {
        self.record(Call::WordPressCom, transport);
        self.wpcom.clone()
    }
}

pub fn signed_in() -> Account {
    Account::new("alice", Some("alice-token".to_string()))
}

/// Decode a wire payload from a `json!` literal
pub fn wire<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}

/// Session fixture: account store, device registry and recording remote
pub struct Fixture {
    pub accounts: Arc<StaticAccountStore>,
    pub devices: Arc<StaticDeviceRegistry>,
    pub remote: Arc<FakeRemote>,
}

impl Fixture {
    pub fn new(account: Option<Account>, device_id: Option<&str>, remote: FakeRemote) -> Self {
        Self {
            accounts: Arc::new(StaticAccountStore::new(account)),
            devices: Arc::new(StaticDeviceRegistry::new(device_id.map(str::to_string))),
            remote: Arc::new(remote),
        }
    }

    pub fn service(&self) -> Service {
        Service::new(
            self.accounts.clone(),
            self.devices.clone(),
            self.remote.clone(),
        )
    }
}
