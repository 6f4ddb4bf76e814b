use async_trait::async_trait;
use url::Url;

use crate::errors::SdkError;
use crate::links::ResolvedLink;

use super::sdk_model::SdkConfig;

/// Facade over the platform deep-linking SDK.
///
/// Matching, confidence scoring, networking and install-referrer handling all
/// happen behind this trait. Implementations must be safe to call from any
/// tokio task; the coordinator never holds its own state lock across a call.
#[async_trait]
pub trait DeepLinkSdk: Send + Sync {
    /// Configures the SDK. Later calls replace the previous configuration.
    async fn configure(&self, config: &SdkConfig) -> Result<(), SdkError>;

    /// Looks for a link recovered after installation.
    async fn check_for_deferred_deep_link(&self) -> Result<ResolvedLink, SdkError>;

    /// Resolves an incoming app link or universal link.
    async fn handle_deep_link(&self, url: &Url) -> Result<ResolvedLink, SdkError>;

    /// Clears persisted configuration and session state. Never fails.
    async fn reset(&self);
}
