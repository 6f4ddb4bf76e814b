//! Dynalinks plugin.
//!
//! Binds the initial-link coordinator to the method and event channels and
//! follows the host plugin lifecycle:
//!
//! - engine attach/detach controls whether an execution context exists;
//!   detaching tears the coordinator down for good
//! - activity attach/detach subscribes to the platform's incoming links
//! - listen/cancel attaches the event channel as the live listener

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dynalinks_core::{DeepLinkSdk, InitialLinkCoordinator, LaunchEventSource};
use log::{debug, info, warn};
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::arguments::{link_uri_argument, ConfigureArguments};
use crate::channel::{methods, ChannelError, MethodCall, MethodCallHandler};
use crate::errors::BridgeError;
use crate::event_channel::{EventChannelSink, LinkStream};
use crate::payload::{encode_link, encode_optional_link};
use crate::platform::Platform;

pub struct DynalinksPlugin {
    coordinator: InitialLinkCoordinator,
    platform: Platform,
    engine_attached: AtomicBool,
}

impl DynalinksPlugin {
    /// Creates a plugin around `sdk`, spawning resolutions on the current
    /// tokio runtime.
    pub fn new(sdk: Arc<dyn DeepLinkSdk>, platform: Platform) -> Self {
        Self::from_coordinator(InitialLinkCoordinator::new(sdk), platform)
    }

    /// Creates a plugin whose resolutions run on `runtime`.
    pub fn with_runtime(sdk: Arc<dyn DeepLinkSdk>, platform: Platform, runtime: Handle) -> Self {
        Self::from_coordinator(InitialLinkCoordinator::with_runtime(sdk, runtime), platform)
    }

    fn from_coordinator(coordinator: InitialLinkCoordinator, platform: Platform) -> Self {
        Self {
            coordinator,
            platform,
            engine_attached: AtomicBool::new(false),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn coordinator(&self) -> &InitialLinkCoordinator {
        &self.coordinator
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    pub fn on_attached_to_engine(&self) {
        self.engine_attached.store(true, Ordering::SeqCst);
        info!("Dynalinks plugin attached to engine ({:?})", self.platform);
    }

    /// Drops the execution context and tears the coordinator down. Links
    /// still resolving are discarded when they complete.
    pub fn on_detached_from_engine(&self) {
        self.engine_attached.store(false, Ordering::SeqCst);
        self.coordinator.teardown();
        info!("Dynalinks plugin detached from engine");
    }

    pub fn is_attached_to_engine(&self) -> bool {
        self.engine_attached.load(Ordering::SeqCst)
    }

    /// Subscribes to the activity's incoming links. The launch link is only
    /// handled the first time a given source is attached, so reattaching
    /// after a configuration change does not replay it.
    pub fn on_attached_to_activity(&self, source: &dyn LaunchEventSource) -> Option<JoinHandle<()>> {
        debug!("Dynalinks plugin attached to activity");
        self.coordinator.attach_launch_source(source)
    }

    pub fn on_detached_from_activity(&self) {
        debug!("Dynalinks plugin detached from activity");
        self.coordinator.detach_launch_source();
    }

    /// Starts a listener on the event channel, replacing (and ending) any
    /// previous one.
    pub fn on_listen(&self) -> LinkStream {
        let (sink, stream) = EventChannelSink::new(self.platform);
        self.coordinator.attach_listener(Arc::new(sink));
        stream
    }

    pub fn on_cancel(&self) {
        self.coordinator.detach_listener();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Method channel
    // ─────────────────────────────────────────────────────────────────────

    /// Dispatches a method-channel call.
    pub async fn handle_method_call(&self, call: MethodCall) -> Result<Value, ChannelError> {
        let result = match call.method.as_str() {
            methods::CONFIGURE => self.configure(&call.arguments).await,
            methods::CHECK_FOR_DEFERRED_DEEP_LINK => self.check_for_deferred_deep_link().await,
            methods::HANDLE_DEEP_LINK => self.handle_deep_link(&call.arguments).await,
            methods::GET_INITIAL_LINK => self.get_initial_link(),
            methods::RESET => self.reset().await,
            other => {
                debug!("Unhandled method call '{}'", other);
                return Err(ChannelError::NotImplemented(other.to_string()));
            }
        };
        result.map_err(ChannelError::from)
    }

    async fn configure(&self, arguments: &Value) -> Result<Value, BridgeError> {
        if !self.is_attached_to_engine() {
            return Err(BridgeError::no_context());
        }

        let config = ConfigureArguments::from_value(arguments)?.into_config();
        self.coordinator
            .sdk()
            .configure(&config)
            .await
            .map_err(|e| {
                warn!("Dynalinks configure failed: {}", e);
                BridgeError::from_configure(&e, self.platform)
            })?;

        info!(
            "Dynalinks configured (base URL {}, log level {})",
            config.base_url,
            config.log_level.as_str()
        );
        Ok(Value::Null)
    }

    async fn check_for_deferred_deep_link(&self) -> Result<Value, BridgeError> {
        let link = self
            .coordinator
            .check_for_deferred_deep_link()
            .await
            .map_err(|e| BridgeError::from_sdk(&e, self.platform))?;
        Ok(encode_link(&link, self.platform)?)
    }

    async fn handle_deep_link(&self, arguments: &Value) -> Result<Value, BridgeError> {
        let url = link_uri_argument(arguments)?;
        let link = self
            .coordinator
            .handle_deep_link(&url)
            .await
            .map_err(|e| BridgeError::from_sdk(&e, self.platform))?;
        Ok(encode_link(&link, self.platform)?)
    }

    fn get_initial_link(&self) -> Result<Value, BridgeError> {
        let link = self.coordinator.get_initial_link();
        Ok(encode_optional_link(link.as_ref(), self.platform)?)
    }

    async fn reset(&self) -> Result<Value, BridgeError> {
        self.coordinator.reset().await;
        Ok(Value::Null)
    }
}

#[async_trait]
impl MethodCallHandler for DynalinksPlugin {
    async fn on_method_call(&self, call: MethodCall) -> Result<Value, ChannelError> {
        self.handle_method_call(call).await
    }
}
