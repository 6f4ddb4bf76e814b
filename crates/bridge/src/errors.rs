//! Error codes surfaced to the application layer.

use dynalinks_core::{SdkError, SdkErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::Platform;

pub const INVALID_ARGUMENTS: &str = "INVALID_ARGUMENTS";
pub const NO_CONTEXT: &str = "NO_CONTEXT";
pub const UNKNOWN: &str = "UNKNOWN";

/// Failure payload of a method call: a stable code plus a human-readable
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code}: {message}")]
pub struct BridgeError {
    pub code: String,
    pub message: String,
}

impl BridgeError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(INVALID_ARGUMENTS, message)
    }

    pub fn no_context() -> Self {
        Self::new(NO_CONTEXT, "Application context not available")
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(UNKNOWN, message)
    }

    /// Maps an SDK failure through [`error_entry`]. A message carried by the
    /// error replaces the default one.
    pub fn from_sdk(error: &SdkError, platform: Platform) -> Self {
        let (code, default_message) = error_entry(error.kind(), platform);
        let message = match (error.detail(), error) {
            (Some(detail), _) => detail.to_string(),
            (None, SdkError::Server { status, .. }) => format!("Server error: {}", status),
            (None, _) => default_message.to_string(),
        };
        Self::new(code, message)
    }

    /// Maps a failed `configure`. Only a rejected API key keeps its own code;
    /// anything else is reported as `UNKNOWN`.
    pub fn from_configure(error: &SdkError, platform: Platform) -> Self {
        match error.kind() {
            SdkErrorKind::InvalidApiKey => Self::from_sdk(error, platform),
            _ => Self::unknown(error.detail().map_or_else(|| error.to_string(), str::to_string)),
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(error: serde_json::Error) -> Self {
        Self::unknown(format!("Failed to encode result: {}", error))
    }
}

/// Code and default message for each SDK error kind.
pub fn error_entry(kind: SdkErrorKind, platform: Platform) -> (&'static str, &'static str) {
    match (kind, platform) {
        (SdkErrorKind::NotConfigured, _) => ("NOT_CONFIGURED", "SDK not configured"),
        (SdkErrorKind::InvalidApiKey, _) => ("INVALID_API_KEY", "Invalid API key"),
        (SdkErrorKind::RestrictedDevice, Platform::Android) => {
            ("EMULATOR", "Not available on emulator")
        }
        (SdkErrorKind::RestrictedDevice, Platform::Ios) => {
            ("SIMULATOR", "Not available on simulator")
        }
        (SdkErrorKind::InvalidIntent, _) => ("INVALID_INTENT", "Invalid intent"),
        (SdkErrorKind::Network, _) => ("NETWORK_ERROR", "Network error"),
        (SdkErrorKind::InvalidResponse, _) => ("INVALID_RESPONSE", "Invalid response"),
        (SdkErrorKind::Server, _) => ("SERVER_ERROR", "Server error"),
        (SdkErrorKind::NoMatch, _) => ("NO_MATCH", "No match"),
        (SdkErrorKind::InstallReferrerUnavailable, _) => {
            ("INSTALL_REFERRER_UNAVAILABLE", "Install referrer unavailable")
        }
        (SdkErrorKind::InstallReferrerTimeout, _) => {
            ("INSTALL_REFERRER_TIMEOUT", "Install referrer timed out")
        }
        (SdkErrorKind::Unknown, _) => (UNKNOWN, "Unknown error"),
    }
}
