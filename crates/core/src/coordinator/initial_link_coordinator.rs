//! Initial-link coordinator.
//!
//! Captures the link (if any) that launched the application, hands it to the
//! first `get_initial_link` caller, and pushes every link resolved while a
//! listener is attached straight to that listener.
//!
//! A resolved launch link reaches exactly one consumer: the listener attached
//! when its resolution completes, or otherwise the pending slot drained by
//! `get_initial_link`.
//!
//! All application-visible state sits behind one mutex. Critical sections are
//! short, never span an `.await`, and never emit into a sink while locked.
//!
//! Every resolution remembers the reset epoch it started in. One that
//! completes after a `reset` may still reach the listener but never refills
//! the pending slot.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use url::Url;

use crate::errors::SdkError;
use crate::events::LinkEventSink;
use crate::launch::LaunchEventSource;
use crate::links::{parse_link_uri, ResolvedLink};
use crate::sdk::DeepLinkSdk;

/// Observable state of the pending initial-link slot.
///
/// `Empty -> Filled -> Consumed`, or `Empty -> Consumed` when the link is
/// asked for before anything resolved. `Consumed` is terminal until `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingLinkState {
    Empty,
    Filled,
    Consumed,
}

#[derive(Default)]
struct LinkState {
    pending: Option<ResolvedLink>,
    consumed: bool,
    listener: Option<Arc<dyn LinkEventSink>>,
    closed: bool,
    epoch: u64,
}

/// State shared with spawned resolution tasks and the launch pump.
struct Shared {
    sdk: Arc<dyn DeepLinkSdk>,
    state: Mutex<LinkState>,
    runtime: Option<Handle>,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, LinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn resolve_launch_link(self: &Arc<Self>, uri: &str) -> Option<JoinHandle<()>> {
        let url = match parse_link_uri(uri) {
            Ok(url) => url,
            Err(e) => {
                warn!("Ignoring incoming link: {}", e);
                return None;
            }
        };

        let epoch = {
            let state = self.state();
            if state.closed {
                debug!("Coordinator torn down, ignoring incoming link {}", url);
                return None;
            }
            state.epoch
        };

        let runtime = match self.runtime.clone().or_else(|| Handle::try_current().ok()) {
            Some(runtime) => runtime,
            None => {
                error!("No async runtime available to resolve incoming link {}", url);
                return None;
            }
        };

        let shared = Arc::clone(self);
        Some(runtime.spawn(async move {
            match shared.sdk.handle_deep_link(&url).await {
                Ok(link) => {
                    debug!(
                        "Resolved incoming link {} (confidence {})",
                        url,
                        link.confidence.map_or("unknown", |c| c.as_str())
                    );
                    shared.deliver_launch_link(link, epoch);
                }
                Err(e) => error!("Failed to handle incoming link {}: {}", url, e),
            }
        }))
    }

    fn deliver_launch_link(&self, link: ResolvedLink, epoch: u64) {
        let link = link.with_deferred(false);

        let listener = {
            let mut state = self.state();
            if state.closed {
                debug!("Discarding link resolved after teardown");
                return;
            }
            if state.listener.as_ref().is_some_and(|l| l.is_closed()) {
                debug!("Link listener closed, detaching it");
                state.listener = None;
            }
            match state.listener.clone() {
                Some(listener) => listener,
                None => {
                    if state.epoch != epoch {
                        debug!("Dropping link resolved across a reset");
                    } else if state.consumed {
                        debug!("Initial link already consumed, dropping link resolved without a listener");
                    } else {
                        if state.pending.is_some() {
                            debug!("Replacing unconsumed initial link");
                        }
                        state.pending = Some(link);
                    }
                    return;
                }
            }
        };

        listener.emit(link);
    }
}

/// Coordinates the initial link and the live link stream.
pub struct InitialLinkCoordinator {
    shared: Arc<Shared>,
    launch_pump: Mutex<Option<JoinHandle<()>>>,
}

impl InitialLinkCoordinator {
    /// Creates a coordinator that spawns resolutions on the current tokio
    /// runtime (captured now, or looked up at spawn time if there is none yet).
    pub fn new(sdk: Arc<dyn DeepLinkSdk>) -> Self {
        Self::build(sdk, Handle::try_current().ok())
    }

    /// Creates a coordinator that spawns resolutions on `runtime`.
    ///
    /// Use this when platform callbacks arrive on threads outside the runtime.
    pub fn with_runtime(sdk: Arc<dyn DeepLinkSdk>, runtime: Handle) -> Self {
        Self::build(sdk, Some(runtime))
    }

    fn build(sdk: Arc<dyn DeepLinkSdk>, runtime: Option<Handle>) -> Self {
        Self {
            shared: Arc::new(Shared {
                sdk,
                state: Mutex::new(LinkState::default()),
                runtime,
            }),
            launch_pump: Mutex::new(None),
        }
    }

    pub fn sdk(&self) -> &Arc<dyn DeepLinkSdk> {
        &self.shared.sdk
    }

    /// Handles a link reported by the platform, on cold start or while running.
    ///
    /// Resolution runs on a spawned task; the returned handle may be ignored.
    /// Returns `None` when the link was dropped without calling the SDK
    /// (unparsable URI, torn-down coordinator, no runtime). Resolution
    /// failures are logged and never surface to the application layer.
    pub fn on_launch_link(&self, uri: &str) -> Option<JoinHandle<()>> {
        self.shared.resolve_launch_link(uri)
    }

    /// Drains the pending initial link.
    ///
    /// The first call marks the slot consumed, whether or not a link was
    /// pending. Every later call returns `None` until [`reset`](Self::reset).
    pub fn get_initial_link(&self) -> Option<ResolvedLink> {
        let mut state = self.shared.state();
        if state.consumed {
            return None;
        }
        state.consumed = true;
        state.pending.take()
    }

    pub fn pending_state(&self) -> PendingLinkState {
        let state = self.shared.state();
        if state.consumed {
            PendingLinkState::Consumed
        } else if state.pending.is_some() {
            PendingLinkState::Filled
        } else {
            PendingLinkState::Empty
        }
    }

    /// Attaches the live-stream listener, replacing any previous one.
    ///
    /// The pending initial link is not flushed to it; only links resolved
    /// from now on are pushed.
    pub fn attach_listener(&self, listener: Arc<dyn LinkEventSink>) {
        let mut state = self.shared.state();
        if state.closed {
            debug!("Coordinator torn down, not attaching listener");
            return;
        }
        if state.listener.replace(listener).is_some() {
            debug!("Replaced existing link listener");
        }
    }

    pub fn detach_listener(&self) {
        self.shared.state().listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.shared
            .state()
            .listener
            .as_ref()
            .is_some_and(|l| !l.is_closed())
    }

    /// Clears the pending initial link and its consumed flag, then asks the
    /// SDK to drop its persisted configuration and session state.
    ///
    /// Launch links still resolving when this is called cannot refill the
    /// slot, even if they complete while the SDK reset is in progress.
    pub async fn reset(&self) {
        {
            let mut state = self.shared.state();
            state.pending = None;
            state.consumed = false;
            state.epoch = state.epoch.wrapping_add(1);
        }
        self.shared.sdk.reset().await;
        info!("Initial link state and SDK session reset");
    }

    /// Asks the SDK for a deferred deep link. Does not touch the initial-link
    /// slot.
    pub async fn check_for_deferred_deep_link(&self) -> Result<ResolvedLink, SdkError> {
        let link = self.shared.sdk.check_for_deferred_deep_link().await?;
        Ok(link.with_deferred(true))
    }

    /// Resolves `url` on explicit request. Does not touch the initial-link
    /// slot.
    pub async fn handle_deep_link(&self, url: &Url) -> Result<ResolvedLink, SdkError> {
        let link = self.shared.sdk.handle_deep_link(url).await?;
        Ok(link.with_deferred(false))
    }

    /// Subscribes to a platform launch source.
    ///
    /// Resolves the source's cold-start link (if it still has one) and feeds
    /// every later link to [`on_launch_link`](Self::on_launch_link). Replaces
    /// any previously attached source. Returns the handle of the cold-start
    /// resolution.
    pub fn attach_launch_source(&self, source: &dyn LaunchEventSource) -> Option<JoinHandle<()>> {
        if self.is_torn_down() {
            debug!("Coordinator torn down, not attaching launch source");
            return None;
        }

        let initial = source
            .take_launch_uri()
            .and_then(|uri| self.shared.resolve_launch_link(&uri));

        let mut receiver = source.subscribe();
        let shared = Arc::clone(&self.shared);
        let pump = async move {
            while let Some(uri) = receiver.recv().await {
                shared.resolve_launch_link(&uri);
            }
            debug!("Launch event source closed");
        };

        let runtime = self
            .shared
            .runtime
            .clone()
            .or_else(|| Handle::try_current().ok());
        match runtime {
            Some(runtime) => {
                let pump = runtime.spawn(pump);
                if let Some(previous) = self.launch_pump().replace(pump) {
                    previous.abort();
                }
            }
            None => error!("No async runtime available to listen for incoming links"),
        }

        initial
    }

    /// Stops listening to the attached launch source.
    pub fn detach_launch_source(&self) {
        if let Some(pump) = self.launch_pump().take() {
            pump.abort();
        }
    }

    /// Detaches the launch source and the listener. Resolutions still in
    /// flight are discarded when they complete.
    pub fn teardown(&self) {
        self.detach_launch_source();
        let mut state = self.shared.state();
        state.closed = true;
        state.listener = None;
        info!("Initial link coordinator torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.shared.state().closed
    }

    fn launch_pump(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.launch_pump
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for InitialLinkCoordinator {
    fn drop(&mut self) {
        self.detach_launch_source();
    }
}
