//! In-memory SDK with scripted responses.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::errors::SdkError;
use crate::links::{Confidence, LinkData, ResolvedLink};

use super::sdk_model::SdkConfig;
use super::sdk_traits::DeepLinkSdk;

#[derive(Default)]
struct MockState {
    config: Option<SdkConfig>,
    configure_error: Option<SdkError>,
    link_responses: HashMap<String, Result<ResolvedLink, SdkError>>,
    deferred_response: Option<Result<ResolvedLink, SdkError>>,
    delays: HashMap<String, Duration>,
    handled_uris: Vec<String>,
    reset_count: usize,
}

/// Mock SDK for tests and hosts without a native SDK.
///
/// Behaves like the real SDK with respect to configuration: every resolution
/// fails with [`SdkError::NotConfigured`] until `configure` succeeds, and
/// `reset` drops the configuration again. Unscripted links resolve to a
/// matched link whose `shortened_path` is the URL path without its leading
/// slash.
#[derive(Default)]
pub struct MockDeepLinkSdk {
    state: Mutex<MockState>,
}

impl MockDeepLinkSdk {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that has already been configured with a test key.
    pub fn configured() -> Self {
        let sdk = Self::new();
        sdk.state.lock().unwrap().config = Some(SdkConfig::new("test-client-key"));
        sdk
    }

    /// Scripts the outcome of resolving `uri`.
    pub fn respond_to(&self, uri: &str, response: Result<ResolvedLink, SdkError>) {
        self.state
            .lock()
            .unwrap()
            .link_responses
            .insert(uri.to_string(), response);
    }

    /// Scripts the outcome of `check_for_deferred_deep_link`.
    pub fn respond_deferred(&self, response: Result<ResolvedLink, SdkError>) {
        self.state.lock().unwrap().deferred_response = Some(response);
    }

    /// Makes the next `configure` calls fail with `error`.
    pub fn fail_configure(&self, error: SdkError) {
        self.state.lock().unwrap().configure_error = Some(error);
    }

    /// Delays the resolution of `uri`.
    pub fn delay(&self, uri: &str, delay: Duration) {
        self.state
            .lock()
            .unwrap()
            .delays
            .insert(uri.to_string(), delay);
    }

    /// Returns the active configuration, if any.
    pub fn config(&self) -> Option<SdkConfig> {
        self.state.lock().unwrap().config.clone()
    }

    pub fn is_configured(&self) -> bool {
        self.state.lock().unwrap().config.is_some()
    }

    /// Returns every URI passed to `handle_deep_link`, in call order.
    pub fn handled_uris(&self) -> Vec<String> {
        self.state.lock().unwrap().handled_uris.clone()
    }

    pub fn reset_count(&self) -> usize {
        self.state.lock().unwrap().reset_count
    }

    fn default_resolution(url: &Url) -> ResolvedLink {
        let shortened_path = url.path().trim_start_matches('/').to_string();
        let link = LinkData {
            id: format!("mock-{}", shortened_path),
            path: url.path().to_string(),
            shortened_path: Some(shortened_path),
            url: Some(url.to_string()),
            full_url: Some(url.to_string()),
            clicks: Some(0),
            ..Default::default()
        };
        ResolvedLink::matched(link).with_confidence(Confidence::High, Some(1.0))
    }
}

#[async_trait]
impl DeepLinkSdk for MockDeepLinkSdk {
    async fn configure(&self, config: &SdkConfig) -> Result<(), SdkError> {
        let mut state = self.state.lock().unwrap();
        if let Some(error) = state.configure_error.clone() {
            return Err(error);
        }
        if config.client_api_key.trim().is_empty() {
            return Err(SdkError::InvalidApiKey(
                "Client API key must not be empty".to_string(),
            ));
        }
        debug!("Mock SDK configured for {}", config.base_url);
        state.config = Some(config.clone());
        Ok(())
    }

    async fn check_for_deferred_deep_link(&self) -> Result<ResolvedLink, SdkError> {
        let state = self.state.lock().unwrap();
        if state.config.is_none() {
            return Err(SdkError::NotConfigured);
        }
        state
            .deferred_response
            .clone()
            .unwrap_or(Err(SdkError::NoMatch))
    }

    async fn handle_deep_link(&self, url: &Url) -> Result<ResolvedLink, SdkError> {
        let key = url.to_string();
        let delay = {
            let mut state = self.state.lock().unwrap();
            state.handled_uris.push(key.clone());
            state.delays.get(&key).copied()
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let state = self.state.lock().unwrap();
        if state.config.is_none() {
            return Err(SdkError::NotConfigured);
        }
        match state.link_responses.get(&key) {
            Some(response) => response.clone(),
            None => Ok(Self::default_resolution(url)),
        }
    }

    async fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.config = None;
        state.reset_count += 1;
    }
}
