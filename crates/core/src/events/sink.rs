//! Link event sink trait and implementations.

use std::sync::{Arc, Mutex};

use crate::links::ResolvedLink;

/// Trait for receiving live resolved links.
///
/// The coordinator holds at most one sink at a time (the attached listener).
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no awaiting)
/// - Implementations should queue links for async delivery
/// - A failed delivery is logged by the implementation and otherwise ignored
pub trait LinkEventSink: Send + Sync {
    /// Emit a single resolved link.
    fn emit(&self, link: ResolvedLink);

    /// Whether the receiving end is gone. A closed sink is detached and the
    /// link is handled as if no listener were attached.
    ///
    /// Called with the coordinator's state locked, so it must only inspect
    /// local state.
    fn is_closed(&self) -> bool {
        false
    }
}

/// No-op implementation for contexts that don't need live links.
#[derive(Clone, Default)]
pub struct NoOpLinkEventSink;

impl LinkEventSink for NoOpLinkEventSink {
    fn emit(&self, _link: ResolvedLink) {}
}

/// Mock sink for testing - collects emitted links.
#[derive(Clone, Default)]
pub struct MockLinkEventSink {
    links: Arc<Mutex<Vec<ResolvedLink>>>,
}

impl MockLinkEventSink {
    pub fn new() -> Self {
        Self {
            links: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected links, in emission order.
    pub fn links(&self) -> Vec<ResolvedLink> {
        self.links.lock().unwrap().clone()
    }

    /// Returns the number of collected links.
    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    /// Returns true if no links have been collected.
    pub fn is_empty(&self) -> bool {
        self.links.lock().unwrap().is_empty()
    }
}

impl LinkEventSink for MockLinkEventSink {
    fn emit(&self, link: ResolvedLink) {
        self.links.lock().unwrap().push(link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkData;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpLinkEventSink;
        sink.emit(ResolvedLink::unmatched());
        assert!(!sink.is_closed());
    }

    #[test]
    fn test_mock_sink_collects_links_in_order() {
        let sink = MockLinkEventSink::new();
        assert!(sink.is_empty());

        sink.emit(ResolvedLink::matched(LinkData::new("a", "/a")));
        sink.emit(ResolvedLink::matched(LinkData::new("b", "/b")));
        assert_eq!(sink.len(), 2);

        let ids: Vec<String> = sink
            .links()
            .into_iter()
            .filter_map(|link| link.link.map(|data| data.id))
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_mock_sink_clones_share_storage() {
        let sink = MockLinkEventSink::new();
        let clone = sink.clone();
        clone.emit(ResolvedLink::unmatched());
        assert_eq!(sink.len(), 1);
    }
}
