//! Links module - resolved link models and URI parsing.

mod link_uri;
mod links_model;


pub use link_uri::parse_link_uri;
pub use links_model::{Confidence, LinkData, ResolvedLink};
