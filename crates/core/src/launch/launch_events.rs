//! Channel-backed launch event source.
//!
//! Host glue calls [`LaunchEvents::push`] from its platform callbacks
//! (new intent, continue user activity, ...). Each subscriber gets its own
//! unbounded channel so `push` never blocks the platform thread.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use tokio::sync::mpsc;

use super::launch_traits::LaunchEventSource;

#[derive(Default)]
pub struct LaunchEvents {
    launch_uri: Mutex<Option<String>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<String>>>,
}

impl LaunchEvents {
    /// A source for an app that was not launched by a link.
    pub fn new() -> Self {
        Self::default()
    }

    /// A source for an app launched by `uri`.
    pub fn with_launch_uri(uri: impl Into<String>) -> Self {
        Self {
            launch_uri: Mutex::new(Some(uri.into())),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Reports a link received while the app is running.
    ///
    /// Returns the number of subscribers it was delivered to. Closed
    /// subscribers are pruned.
    pub fn push(&self, uri: impl Into<String>) -> usize {
        let uri = uri.into();
        let mut subscribers = self.subscribers();
        subscribers.retain(|sender| sender.send(uri.clone()).is_ok());
        if subscribers.is_empty() {
            debug!("Incoming link {} has no subscriber", uri);
        }
        subscribers.len()
    }

    /// Number of subscribers still listening.
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.subscribers();
        subscribers.retain(|sender| !sender.is_closed());
        subscribers.len()
    }

    fn subscribers(&self) -> MutexGuard<'_, Vec<mpsc::UnboundedSender<String>>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl LaunchEventSource for LaunchEvents {
    fn take_launch_uri(&self) -> Option<String> {
        self.launch_uri
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<String> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers().push(sender);
        receiver
    }
}
