//! Launch module - platform hooks that report incoming links.

mod launch_events;
mod launch_traits;

pub use launch_events::LaunchEvents;
pub use launch_traits::LaunchEventSource;
