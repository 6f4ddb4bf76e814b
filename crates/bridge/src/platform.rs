use serde::{Deserialize, Serialize};

/// Host platform the bridge runs on.
///
/// Selects the platform-specific error code for restricted devices and
/// whether attribution fields are part of the link payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// The platform this binary was compiled for. Non-Apple targets report
    /// [`Platform::Android`].
    pub fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    /// Whether resolved links carry install attribution
    /// (`referrer`, `provider_token`, `campaign_token`).
    pub fn reports_attribution(&self) -> bool {
        matches!(self, Platform::Android)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
