//! Method channel primitives.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::errors::BridgeError;

/// Name of the request/response channel.
pub const METHOD_CHANNEL: &str = "com.dynalinks.sdk/dynalinks";

/// Name of the channel carrying live resolved links.
pub const EVENT_CHANNEL: &str = "com.dynalinks.sdk/deep_links";

pub mod methods {
    pub const CONFIGURE: &str = "configure";
    pub const CHECK_FOR_DEFERRED_DEEP_LINK: &str = "checkForDeferredDeepLink";
    pub const HANDLE_DEEP_LINK: &str = "handleDeepLink";
    pub const GET_INITIAL_LINK: &str = "getInitialLink";
    pub const RESET: &str = "reset";
}

/// A single invocation arriving on the method channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// A call without arguments.
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }
}

/// Failure answer to a method call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The call failed with a stable error code.
    #[error(transparent)]
    Failed(#[from] BridgeError),

    /// The channel has no handler for the method.
    #[error("Method not implemented: {0}")]
    NotImplemented(String),
}

impl ChannelError {
    /// The error code, if the call failed with one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ChannelError::Failed(error) => Some(error.code.as_str()),
            ChannelError::NotImplemented(_) => None,
        }
    }
}

/// Handler for calls on the method channel.
#[async_trait]
pub trait MethodCallHandler: Send + Sync {
    /// Answers `call` with a success payload or a [`ChannelError`].
    async fn on_method_call(&self, call: MethodCall) -> Result<Value, ChannelError>;
}
