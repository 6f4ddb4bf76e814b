//! Event channel sink implementation.
//!
//! Implements LinkEventSink by encoding each link into its wire payload and
//! sending it to an mpsc channel read by the listening application layer.

use dynalinks_core::{LinkEventSink, ResolvedLink};
use log::{debug, error};
use serde_json::Value;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::payload::encode_link;
use crate::platform::Platform;

/// Stream of link payloads handed out by `on_listen`.
///
/// Ends when the listener is cancelled, replaced, or the plugin is detached.
pub type LinkStream = UnboundedReceiverStream<Value>;

/// Event channel sink.
///
/// `emit()` encodes and enqueues without blocking; delivery failures are
/// logged and dropped.
pub struct EventChannelSink {
    sender: mpsc::UnboundedSender<Value>,
    platform: Platform,
}

impl EventChannelSink {
    /// Creates a sink and the stream it feeds.
    pub fn new(platform: Platform) -> (Self, LinkStream) {
        let (sender, receiver) = mpsc::unbounded_channel();
        debug!("Event channel listener created");
        (
            Self { sender, platform },
            UnboundedReceiverStream::new(receiver),
        )
    }
}

impl LinkEventSink for EventChannelSink {
    fn emit(&self, link: ResolvedLink) {
        let payload = match encode_link(&link, self.platform) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to encode link event: {}", e);
                return;
            }
        };
        if let Err(e) = self.sender.send(payload) {
            error!("Failed to send link event to listener: {}", e);
        }
    }

    fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
