//! Tunables for the hub, read from the optional `settings` section of the
//! catalog configuration.

use serde::Deserialize;

/// Local path prefix the reverse proxy serves embedded games under.
pub const DEFAULT_PROXY_PREFIX: &str = "/g";
/// Maximum length of the recently opened list.
pub const DEFAULT_RECENT_LIMIT: usize = 20;
/// How long a toast stays visible.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 2500;
/// Storage key holding the favorites list.
pub const DEFAULT_FAVORITES_KEY: &str = "aphelion_fav";
/// Storage key holding the recent list.
pub const DEFAULT_RECENT_KEY: &str = "aphelion_recent";

/// Runtime settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HubSettings {
    pub proxy_prefix: String,
    pub recent_limit: usize,
    pub toast_duration_ms: u32,
    pub favorites_key: String,
    pub recent_key: String,
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            proxy_prefix: DEFAULT_PROXY_PREFIX.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            recent_key: DEFAULT_RECENT_KEY.to_string(),
        }
    }
}

impl HubSettings {
    /// Proxy prefix without a trailing slash, so paths join cleanly.
    pub fn proxy_prefix(&self) -> &str {
        self.proxy_prefix.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_keep_defaults() {
        let settings: HubSettings = serde_json::from_str(r#"{"recent_limit":5}"#).unwrap();
        assert_eq!(settings.recent_limit, 5);
        assert_eq!(settings.proxy_prefix, "/g");
        assert_eq!(settings.toast_duration_ms, 2500);
        assert_eq!(settings.favorites_key, "aphelion_fav");
    }

    #[test]
    fn prefix_trailing_slash_is_trimmed() {
        let settings = HubSettings {
            proxy_prefix: "/play/".to_string(),
            ..HubSettings::default()
        };
        assert_eq!(settings.proxy_prefix(), "/play");
    }
}
