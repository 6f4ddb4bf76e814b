//! SDK module - the facade over the third-party deep-linking SDK.
//!
//! The SDK is installed separately per platform and treated as opaque. Host
//! glue implements [`DeepLinkSdk`] on top of it; [`MockDeepLinkSdk`] stands in
//! for it in tests and on hosts without a native SDK.

mod mock;
mod sdk_model;
mod sdk_traits;

pub use mock::MockDeepLinkSdk;
pub use sdk_model::{LogLevel, SdkConfig};
pub use sdk_traits::DeepLinkSdk;
