//! Core error types for the Dynalinks bridge.
//!
//! [`SdkError`] is the taxonomy of failures the deep-linking SDK can report.
//! It stays transport-agnostic: turning a failure into a stable string code
//! for the application layer is the bridge crate's job.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid link URI '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
}

/// Failures reported by the deep-linking SDK.
///
/// Variants carrying a `String` keep the SDK's own message; the bridge uses it
/// in place of the default message for that kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    /// A call was made before `configure` succeeded (or after `reset`).
    #[error("SDK not configured")]
    NotConfigured,

    /// The client API key was rejected.
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    /// The SDK refuses to run on an emulator or simulator.
    #[error("Not available on emulator or simulator")]
    RestrictedDevice,

    /// The incoming intent carried no usable link (Android).
    #[error("Invalid intent")]
    InvalidIntent,

    /// The request never reached the server.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a body the SDK could not decode.
    #[error("Invalid response")]
    InvalidResponse,

    /// The server answered with an error status.
    #[error("Server error ({status})")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// No link matched the request.
    #[error("No matching link")]
    NoMatch,

    /// The Play install referrer service is not available (Android).
    #[error("Install referrer unavailable")]
    InstallReferrerUnavailable,

    /// The Play install referrer service did not answer in time (Android).
    #[error("Install referrer timed out")]
    InstallReferrerTimeout,

    /// Anything the SDK raised that is not part of its documented taxonomy.
    #[error("Unknown SDK error: {0}")]
    Unknown(String),
}

/// Field-less classification of [`SdkError`], used as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdkErrorKind {
    NotConfigured,
    InvalidApiKey,
    RestrictedDevice,
    InvalidIntent,
    Network,
    InvalidResponse,
    Server,
    NoMatch,
    InstallReferrerUnavailable,
    InstallReferrerTimeout,
    Unknown,
}

impl SdkErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [SdkErrorKind; 11] = [
        SdkErrorKind::NotConfigured,
        SdkErrorKind::InvalidApiKey,
        SdkErrorKind::RestrictedDevice,
        SdkErrorKind::InvalidIntent,
        SdkErrorKind::Network,
        SdkErrorKind::InvalidResponse,
        SdkErrorKind::Server,
        SdkErrorKind::NoMatch,
        SdkErrorKind::InstallReferrerUnavailable,
        SdkErrorKind::InstallReferrerTimeout,
        SdkErrorKind::Unknown,
    ];
}

impl SdkError {
    /// Returns the lookup key for this error.
    pub fn kind(&self) -> SdkErrorKind {
        match self {
            Self::NotConfigured => SdkErrorKind::NotConfigured,
            Self::InvalidApiKey(_) => SdkErrorKind::InvalidApiKey,
            Self::RestrictedDevice => SdkErrorKind::RestrictedDevice,
            Self::InvalidIntent => SdkErrorKind::InvalidIntent,
            Self::Network(_) => SdkErrorKind::Network,
            Self::InvalidResponse => SdkErrorKind::InvalidResponse,
            Self::Server { .. } => SdkErrorKind::Server,
            Self::NoMatch => SdkErrorKind::NoMatch,
            Self::InstallReferrerUnavailable => SdkErrorKind::InstallReferrerUnavailable,
            Self::InstallReferrerTimeout => SdkErrorKind::InstallReferrerTimeout,
            Self::Unknown(_) => SdkErrorKind::Unknown,
        }
    }

    /// Returns the SDK-supplied message, if any and non-blank.
    pub fn detail(&self) -> Option<&str> {
        let detail = match self {
            Self::InvalidApiKey(message) | Self::Network(message) | Self::Unknown(message) => {
                Some(message.as_str())
            }
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        };
        detail.filter(|message| !message.trim().is_empty())
    }

    /// Create a server error from status and optional message
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server { status, message }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create an unknown error
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown(message.into())
    }
}
