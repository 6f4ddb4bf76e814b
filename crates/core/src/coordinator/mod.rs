//! Coordinator module - buffering of the link that launched the app.

mod initial_link_coordinator;


pub use initial_link_coordinator::{InitialLinkCoordinator, PendingLinkState};
