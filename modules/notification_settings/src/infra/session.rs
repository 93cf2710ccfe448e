//! In-memory account store and device registry
//!
//! Used when the host application keeps session state in memory, and in tests.

use crate::domain::{Account, AccountStore, DeviceRegistry};
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

/// Account store holding at most one default account
#[derive(Default)]
pub struct StaticAccountStore {
    account: RwLock<Option<Account>>,
}

impl StaticAccountStore {
    pub fn new(account: Option<Account>) -> Self {
        Self {
            account: RwLock::new(account),
        }
    }

    /// Replace the default account
    pub fn sign_in(&self, account: Account) {
        *self.account.write() = Some(account);
    }

    pub fn sign_out(&self) {
        *self.account.write() = None;
    }
}

#[async_trait]
impl AccountStore for StaticAccountStore {
    async fn default_account(&self) -> Result<Option<Account>> {
        Ok(self.account.read().clone())
    }
}

/// Device registry holding the push device id, if registered
#[derive(Default)]
pub struct StaticDeviceRegistry {
    device_id: RwLock<Option<String>>,
}

impl StaticDeviceRegistry {
    pub fn new(device_id: Option<String>) -> Self {
        Self {
            device_id: RwLock::new(device_id),
        }
    }

    pub fn register(&self, device_id: impl Into<String>) {
        *self.device_id.write() = Some(device_id.into());
    }

    pub fn unregister(&self) {
        *self.device_id.write() = None;
    }
}

impl DeviceRegistry for StaticDeviceRegistry {
    fn registered_device_id(&self) -> Option<String> {
        self.device_id.read().clone()
    }
}
