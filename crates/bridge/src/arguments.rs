//! Method-call argument marshaling.
//!
//! Argument maps use the channel's camelCase keys. Optional settings fall
//! back to their defaults instead of failing the call.

use dynalinks_core::constants::DEFAULT_BASE_URL;
use dynalinks_core::{parse_link_uri, LogLevel, SdkConfig};
use log::warn;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::errors::BridgeError;

/// Arguments of `configure`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigureArguments {
    #[serde(rename = "clientAPIKey")]
    pub client_api_key: String,
    #[serde(rename = "baseURL", default)]
    pub base_url: Option<String>,
    #[serde(rename = "logLevel", default)]
    pub log_level: Option<String>,
    #[serde(rename = "allowSimulatorOrEmulator", default)]
    pub allow_simulator_or_emulator: Option<bool>,
}

impl ConfigureArguments {
    pub fn from_value(arguments: &Value) -> Result<Self, BridgeError> {
        if arguments.get("clientAPIKey").and_then(Value::as_str).is_none() {
            return Err(BridgeError::invalid_arguments("Missing clientAPIKey"));
        }
        serde_json::from_value(arguments.clone()).map_err(|e| {
            BridgeError::invalid_arguments(format!("Invalid configure arguments: {}", e))
        })
    }

    /// Builds the SDK configuration, applying defaults for absent or
    /// unusable settings.
    pub fn into_config(self) -> SdkConfig {
        let base_url = match self.base_url {
            Some(base_url) if Url::parse(&base_url).is_ok() => base_url,
            Some(base_url) => {
                warn!(
                    "Invalid baseURL '{}', using {} instead",
                    base_url, DEFAULT_BASE_URL
                );
                DEFAULT_BASE_URL.to_string()
            }
            None => DEFAULT_BASE_URL.to_string(),
        };
        let log_level = self
            .log_level
            .as_deref()
            .map(LogLevel::from_name)
            .unwrap_or_default();

        SdkConfig::new(self.client_api_key)
            .with_base_url(base_url)
            .with_log_level(log_level)
            .with_allow_emulator(self.allow_simulator_or_emulator.unwrap_or(false))
    }
}

/// Extracts and validates the `uri` argument of `handleDeepLink`.
pub fn link_uri_argument(arguments: &Value) -> Result<Url, BridgeError> {
    arguments
        .get("uri")
        .and_then(Value::as_str)
        .and_then(|raw| parse_link_uri(raw).ok())
        .ok_or_else(|| BridgeError::invalid_arguments("Missing or invalid URI"))
}
