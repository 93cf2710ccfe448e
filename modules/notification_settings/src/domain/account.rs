//! Accounts, transport handles and transport resolution

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Authenticated handle for issuing WordPress.com REST calls
#[derive(Clone, PartialEq, Eq)]
pub struct Transport {
    username: String,
    auth_token: String,
}

impl Transport {
    /// Account the transport authenticates as
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Bearer token for the `Authorization` header
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("username", &self.username)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// WordPress.com account as known to the local store
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub auth_token: Option<String>,
}

impl Account {
    pub fn new(username: impl Into<String>, auth_token: Option<String>) -> Self {
        Self {
            username: username.into(),
            auth_token,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.auth_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    /// Transport for this account, only when its credentials are usable
    pub fn credentialed_transport(&self) -> Option<Transport> {
        if !self.has_credentials() {
            return None;
        }
        self.auth_token.as_ref().map(|token| Transport {
            username: self.username.clone(),
            auth_token: token.clone(),
        })
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Read access to the locally persisted accounts
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// The default WordPress.com account, if one is signed in
    async fn default_account(&self) -> Result<Option<Account>>;
}

/// Resolves the transport for the current default account
#[derive(Clone)]
pub struct TransportResolver {
    accounts: Arc<dyn AccountStore>,
}

impl TransportResolver {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Returns `None` when there is no account or it has no valid credentials.
    ///
    /// A failing store lookup is treated the same as a missing account.
    pub async fn resolve(&self) -> Option<Transport> {
        match self.accounts.default_account().await {
            Ok(account) => account.and_then(|a| a.credentialed_transport()),
            Err(e) => {
                tracing::warn!(error = %e, "Default account lookup failed");
                None
            }
        }
    }
}
