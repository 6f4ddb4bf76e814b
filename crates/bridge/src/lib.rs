//! Dynalinks Bridge - method and event channel adapter.
//!
//! Exposes the deep-linking SDK to an application layer over two channels:
//!
//! - `com.dynalinks.sdk/dynalinks`: request/response calls (`configure`,
//!   `checkForDeferredDeepLink`, `handleDeepLink`, `getInitialLink`, `reset`)
//! - `com.dynalinks.sdk/deep_links`: a stream of links resolved while a
//!   listener is attached
//!
//! SDK failures cross the boundary as [`BridgeError`] `{ code, message }`.

pub mod arguments;
pub mod channel;
pub mod errors;
pub mod event_channel;
pub mod payload;
pub mod platform;
pub mod plugin;

pub use channel::{ChannelError, MethodCall, MethodCallHandler, EVENT_CHANNEL, METHOD_CHANNEL};
pub use errors::BridgeError;
pub use event_channel::{EventChannelSink, LinkStream};
pub use platform::Platform;
pub use plugin::DynalinksPlugin;
