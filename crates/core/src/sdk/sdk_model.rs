use log::LevelFilter;

use crate::constants::DEFAULT_BASE_URL;

/// Verbosity the SDK should log with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    None,
    #[default]
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// Parses a level name. Unknown names fall back to [`LogLevel::Error`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "none" => LogLevel::None,
            "error" => LogLevel::Error,
            "warning" => LogLevel::Warning,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            _ => LogLevel::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::None => "none",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    /// The equivalent `log` filter, for hosts that align their logger with
    /// the SDK's verbosity.
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::None => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

/// Settings handed to the SDK by `configure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    pub client_api_key: String,
    pub base_url: String,
    pub log_level: LogLevel,
    pub allow_emulator: bool,
}

impl SdkConfig {
    /// Configuration with every optional setting at its default.
    pub fn new(client_api_key: impl Into<String>) -> Self {
        Self {
            client_api_key: client_api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: LogLevel::default(),
            allow_emulator: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_allow_emulator(mut self, allow_emulator: bool) -> Self {
        self.allow_emulator = allow_emulator;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_name() {
        assert_eq!(LogLevel::from_name("none"), LogLevel::None);
        assert_eq!(LogLevel::from_name("warning"), LogLevel::Warning);
        assert_eq!(LogLevel::from_name("debug"), LogLevel::Debug);
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_error() {
        assert_eq!(LogLevel::from_name("verbose"), LogLevel::Error);
        assert_eq!(LogLevel::from_name("WARNING"), LogLevel::Error);
        assert_eq!(LogLevel::default(), LogLevel::Error);
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(LogLevel::None.level_filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Warning.level_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Debug.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_config_defaults() {
        let config = SdkConfig::new("pk_live_123");
        assert_eq!(config.base_url, "https://dynalinks.app/api/v1");
        assert_eq!(config.log_level, LogLevel::Error);
        assert!(!config.allow_emulator);
    }
}
