//! Resolved link domain models.
//!
//! The serde shape of these types is the wire payload handed to the
//! application layer, so field names are snake_case and stable.

use serde::{Deserialize, Serialize};

/// SDK-assigned certainty that a resolution matches the intended link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    None,
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::None => "none",
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Link record attached to a matched resolution.
///
/// Every base field is always serialized (as `null` when unknown). The
/// attribution fields at the end are Android-only and omitted when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkData {
    pub id: String,
    pub name: Option<String>,
    pub path: String,
    pub shortened_path: Option<String>,
    pub url: Option<String>,
    pub full_url: Option<String>,
    pub deep_link_value: Option<String>,
    pub android_fallback_url: Option<String>,
    pub ios_fallback_url: Option<String>,
    pub enable_forced_redirect: Option<bool>,
    pub social_title: Option<String>,
    pub social_description: Option<String>,
    pub social_image_url: Option<String>,
    pub clicks: Option<u64>,
    pub ios_deferred_deep_linking_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_token: Option<String>,
}

impl LinkData {
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            ..Default::default()
        }
    }
}

/// Result of resolving a URI through the SDK. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLink {
    pub matched: bool,
    pub confidence: Option<Confidence>,
    pub match_score: Option<f64>,
    #[serde(default)]
    pub is_deferred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkData>,
}

impl ResolvedLink {
    /// A matched resolution carrying `link`.
    pub fn matched(link: LinkData) -> Self {
        Self {
            matched: true,
            confidence: None,
            match_score: None,
            is_deferred: false,
            link: Some(link),
        }
    }

    /// A resolution that found nothing.
    pub fn unmatched() -> Self {
        Self {
            matched: false,
            confidence: None,
            match_score: None,
            is_deferred: false,
            link: None,
        }
    }

    pub fn with_confidence(mut self, confidence: Confidence, match_score: Option<f64>) -> Self {
        self.confidence = Some(confidence);
        self.match_score = match_score;
        self
    }

    /// Returns a copy flagged as deferred (or not).
    pub fn with_deferred(mut self, is_deferred: bool) -> Self {
        self.is_deferred = is_deferred;
        self
    }

    pub fn shortened_path(&self) -> Option<&str> {
        self.link.as_ref()?.shortened_path.as_deref()
    }
}
