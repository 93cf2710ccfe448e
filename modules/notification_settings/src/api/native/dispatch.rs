//! Callback-style surface over the native client
//!
//! Each call spawns one task on the current tokio runtime. The task completes
//! through at most one of the two handlers. When no authenticated account is
//! available nothing is dispatched and neither handler runs.

use crate::contract::{
    NotificationSettings, NotificationSettingsApi, NotificationsError, OtherSettings, RemoteError,
    SiteSettings, WordPressComSetting,
};
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Success handler receiving the translated settings
pub type OnSuccess<T> = Box<dyn FnOnce(T) + Send + 'static>;

/// Failure handler receiving the transport error as reported
pub type OnFailure = Box<dyn FnOnce(RemoteError) + Send + 'static>;

/// Completion-handler client for callers outside async code
///
/// Every method returns the spawned task's handle. Awaiting it is optional;
/// the handlers run either way.
#[derive(Clone)]
pub struct CallbackClient {
    api: Arc<dyn NotificationSettingsApi>,
}

impl CallbackClient {
    /// Create a callback client over any async client
    pub fn new(api: Arc<dyn NotificationSettingsApi>) -> Self {
        Self { api }
    }

    /// Fetch all settings for the default account
    pub fn get_all_settings(
        &self,
        success: Option<OnSuccess<NotificationSettings>>,
        failure: Option<OnFailure>,
    ) -> JoinHandle<()> {
        let api = self.api.clone();
        dispatch(
            async move { api.get_all_settings().await },
            success,
            failure,
        )
    }

    /// Fetch settings for `site_id`; `success` receives every site the backend returned
    pub fn get_site_settings(
        &self,
        site_id: u64,
        success: Option<OnSuccess<Vec<SiteSettings>>>,
        failure: Option<OnFailure>,
    ) -> JoinHandle<()> {
        let api = self.api.clone();
        dispatch(
            async move { api.get_site_settings(site_id).await },
            success,
            failure,
        )
    }

    /// Fetch the site-independent preference groups
    pub fn get_other_settings(
        &self,
        success: Option<OnSuccess<Vec<OtherSettings>>>,
        failure: Option<OnFailure>,
    ) -> JoinHandle<()> {
        let api = self.api.clone();
        dispatch(
            async move { api.get_other_settings().await },
            success,
            failure,
        )
    }

    /// Fetch the global WordPress.com entries
    pub fn get_wordpress_com_settings(
        &self,
        success: Option<OnSuccess<Vec<WordPressComSetting>>>,
        failure: Option<OnFailure>,
    ) -> JoinHandle<()> {
        let api = self.api.clone();
        dispatch(
            async move { api.get_wordpress_com_settings().await },
            success,
            failure,
        )
    }
}

fn dispatch<T, F>(
    operation: F,
    success: Option<OnSuccess<T>>,
    failure: Option<OnFailure>,
) -> JoinHandle<()>
where
    T: Send + 'static,
    F: Future<Output = Result<T, NotificationsError>> + Send + 'static,
{
    tokio::spawn(async move {
        match operation.await {
            Ok(value) => {
                if let Some(on_success) = success {
                    on_success(value);
                }
            }
            Err(NotificationsError::Remote(error)) => {
                if let Some(on_failure) = failure {
                    on_failure(error);
                }
            }
            // Not a transport failure: the request never left, so there is no outcome.
            Err(NotificationsError::Unauthenticated) => {}
        }
    })
}
