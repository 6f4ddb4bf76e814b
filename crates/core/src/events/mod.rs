//! Link events module.
//!
//! Provides the sink trait the coordinator pushes live links through.
//! Transport adapters implement the sink to forward links to the
//! application layer's event stream.

mod sink;

pub use sink::*;
