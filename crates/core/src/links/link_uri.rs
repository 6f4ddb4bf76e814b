use url::Url;

use crate::errors::{Error, Result};

/// Parses an incoming link string into an absolute URL.
///
/// Surrounding whitespace is ignored. Relative references and empty strings
/// are rejected.
pub fn parse_link_uri(raw: &str) -> Result<Url> {
    Url::parse(raw.trim()).map_err(|source| Error::InvalidUri {
        uri: raw.to_string(),
        source,
    })
}
