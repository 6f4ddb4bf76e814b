//! Dynalinks Core - Link models, SDK facade, and initial-link coordination.
//!
//! This crate holds the platform-agnostic part of the Dynalinks bridge.
//! The deep-linking SDK itself is an opaque collaborator behind the
//! [`DeepLinkSdk`] trait; platform launch hooks are injected through
//! [`LaunchEventSource`]; stream listeners implement [`LinkEventSink`].
//!
//! # Architecture
//!
//! ```text
//! +-------------------+       +---------------------------+
//! | LaunchEventSource | ----> |  InitialLinkCoordinator   |
//! +-------------------+       +---------------------------+
//!                                 |                  |
//!                                 v                  v
//!                         +--------------+   +---------------+
//!                         | DeepLinkSdk  |   | LinkEventSink |  (live stream)
//!                         +--------------+   +---------------+
//! ```
//!
//! The transport surface (method channel, event channel, error codes) lives
//! in the `dynalinks-bridge` crate.

pub mod constants;
pub mod coordinator;
pub mod errors;
pub mod events;
pub mod launch;
pub mod links;
pub mod sdk;

// Re-export the public interface
pub use coordinator::{InitialLinkCoordinator, PendingLinkState};
pub use events::{LinkEventSink, MockLinkEventSink, NoOpLinkEventSink};
pub use launch::{LaunchEventSource, LaunchEvents};
pub use links::{parse_link_uri, Confidence, LinkData, ResolvedLink};
pub use sdk::{DeepLinkSdk, LogLevel, MockDeepLinkSdk, SdkConfig};

// Re-export error types
pub use errors::{Error, Result, SdkError, SdkErrorKind};
