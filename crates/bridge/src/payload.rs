use dynalinks_core::ResolvedLink;
use serde_json::Value;

use crate::platform::Platform;

/// Encodes a resolved link as the wire map handed to the application layer.
///
/// Attribution fields are only part of the payload on platforms that report
/// them.
pub fn encode_link(link: &ResolvedLink, platform: Platform) -> Result<Value, serde_json::Error> {
    if platform.reports_attribution() {
        return serde_json::to_value(link);
    }

    let mut link = link.clone();
    if let Some(data) = link.link.as_mut() {
        data.referrer = None;
        data.provider_token = None;
        data.campaign_token = None;
    }
    serde_json::to_value(&link)
}

/// Encodes an optional link, mapping absence to `null`.
pub fn encode_optional_link(
    link: Option<&ResolvedLink>,
    platform: Platform,
) -> Result<Value, serde_json::Error> {
    link.map_or(Ok(Value::Null), |link| encode_link(link, platform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynalinks_core::{Confidence, LinkData};
    use serde_json::json;

    fn attributed_link() -> ResolvedLink {
        let mut data = LinkData::new("lnk_1", "/promo");
        data.shortened_path = Some("promo".to_string());
        data.referrer = Some("utm_source=ads".to_string());
        data.campaign_token = Some("spring".to_string());
        ResolvedLink::matched(data).with_confidence(Confidence::Medium, Some(0.7))
    }

    #[test]
    fn test_android_payload_keeps_attribution() {
        let value = encode_link(&attributed_link(), Platform::Android).unwrap();

        assert_eq!(value["confidence"], json!("medium"));
        assert_eq!(value["match_score"], json!(0.7));
        assert_eq!(value["is_deferred"], json!(false));
        assert_eq!(value["link"]["referrer"], json!("utm_source=ads"));
        assert_eq!(value["link"]["campaign_token"], json!("spring"));
        assert!(value["link"].get("provider_token").is_none());
    }

    #[test]
    fn test_ios_payload_drops_attribution() {
        let value = encode_link(&attributed_link(), Platform::Ios).unwrap();
        let link = value["link"].as_object().unwrap();

        assert_eq!(link["shortened_path"], json!("promo"));
        assert!(!link.contains_key("referrer"));
        assert!(!link.contains_key("campaign_token"));
        assert!(link.contains_key("social_title"));
    }

    #[test]
    fn test_absent_link_is_null() {
        assert_eq!(
            encode_optional_link(None, Platform::Android).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_unmatched_payload_has_no_link_key() {
        let value = encode_link(&ResolvedLink::unmatched(), Platform::Ios).unwrap();
        assert_eq!(
            value,
            json!({
                "matched": false,
                "confidence": null,
                "match_score": null,
                "is_deferred": false
            })
        );
    }
}
