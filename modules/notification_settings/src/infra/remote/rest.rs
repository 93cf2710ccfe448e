//! reqwest implementation of the notification settings transport
//!
//! Every category is served from `GET me/notifications/settings/`; the
//! envelope is decoded once and the relevant part handed back.

use crate::config::Config;
use crate::contract::{
    RemoteError, RemoteNotificationSettings, RemoteOtherSettings, RemoteSiteSettings,
    RemoteWordPressComSetting,
};
use crate::domain::{NotificationsRemote, Transport};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

const SETTINGS_PATH: &str = "me/notifications/settings/";

/// WordPress.com REST transport
#[derive(Clone)]
pub struct RestNotificationsRemote {
    http: Client,
    endpoint: Url,
}

impl RestNotificationsRemote {
    /// Build the HTTP client from `config`.
    ///
    /// Fails when the client cannot be constructed or `api_base_url` is not a
    /// valid URL. Pass a validated config so the base URL ends with `/`.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to build HTTP client")?;
        let endpoint = config
            .base_url()?
            .join(SETTINGS_PATH)
            .context("Failed to build notification settings endpoint")?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(
        &self,
        transport: &Transport,
        query: &[(&str, String)],
    ) -> Result<RemoteNotificationSettings, RemoteError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .bearer_auth(transport.auth_token())
            .query(query)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(%status, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            return Err(http_error(status, &body));
        }

        response
            .json::<RemoteNotificationSettings>()
            .await
            .map_err(map_reqwest_error)
    }
}

#[async_trait]
impl NotificationsRemote for RestNotificationsRemote {
    async fn get_all_settings(
        &self,
        transport: &Transport,
        device_id: &str,
    ) -> Result<RemoteNotificationSettings, RemoteError> {
        self.fetch(transport, &device_query(device_id)).await
    }

    async fn get_site_settings(
        &self,
        transport: &Transport,
        device_id: &str,
        site_id: u64,
    ) -> Result<Vec<RemoteSiteSettings>, RemoteError> {
        let mut query = device_query(device_id);
        query.push(("blog_id", site_id.to_string()));

        Ok(self.fetch(transport, &query).await?.blogs)
    }

    async fn get_other_settings(
        &self,
        transport: &Transport,
        device_id: &str,
    ) -> Result<Vec<RemoteOtherSettings>, RemoteError> {
        let envelope = self.fetch(transport, &device_query(device_id)).await?;
        Ok(envelope
            .other
            .map(|other| other.into_streams())
            .unwrap_or_default())
    }

    async fn get_wordpress_com_settings(
        &self,
        transport: &Transport,
    ) -> Result<Vec<RemoteWordPressComSetting>, RemoteError> {
        let envelope = self.fetch(transport, &[]).await?;
        Ok(envelope
            .wpcom
            .map(RemoteWordPressComSetting::from_flags)
            .unwrap_or_default())
    }
}

fn device_query(device_id: &str) -> Vec<(&'static str, String)> {
    if device_id.is_empty() {
        Vec::new()
    } else {
        vec![("device_id", device_id.to_string())]
    }
}

/// WordPress.com error body: `{"error": "...", "message": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn http_error(status: StatusCode, body: &str) -> RemoteError {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let code = parsed.as_ref().and_then(|b| b.error.clone());
    let message = parsed
        .and_then(|b| b.message)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Request failed".to_string());

    RemoteError::http(status.as_u16(), code, message)
}

fn map_reqwest_error(error: reqwest::Error) -> RemoteError {
    if error.is_decode() {
        RemoteError::Decode(error.to_string())
    } else {
        RemoteError::Network(error.to_string())
    }
}
