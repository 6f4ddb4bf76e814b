use tokio::sync::mpsc;

/// Platform capability that reports incoming links.
///
/// Stands in for the activity / app-delegate callbacks: the cold-start link
/// that launched the app, then every link delivered while it is running.
pub trait LaunchEventSource: Send + Sync {
    /// Takes the link the app was launched with.
    ///
    /// Returns it at most once per source, so re-attaching the same source
    /// (e.g. after a configuration change) does not replay it.
    fn take_launch_uri(&self) -> Option<String>;

    /// Subscribes to links arriving while the app runs.
    ///
    /// Dropping the receiver unsubscribes.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<String>;
}
