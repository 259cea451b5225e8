//! Frontend configuration structures and loaders.
//!
//! Presentation settings shared by every transport.

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    /// Only answer messages from this channel when set.
    pub allowed_channel: Option<String>,
    /// Boss names per `!list` column.
    pub list_chunk_size: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            allowed_channel: None,
            list_chunk_size: 8,
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ALLOWED_CHANNEL` - Restrict the bot to one channel (default: any)
    /// - `LIST_CHUNK_SIZE` - Names per `!list` column (default: 8)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.allowed_channel =
            lookup("ALLOWED_CHANNEL").filter(|channel| !channel.trim().is_empty());

        if let Some(size) = read_var::<usize>(&lookup, "LIST_CHUNK_SIZE") {
            config.list_chunk_size = size.max(1);
        }

        config
    }

    pub fn accepts_channel(&self, channel: &str) -> bool {
        self.allowed_channel
            .as_deref()
            .is_none_or(|allowed| allowed == channel)
    }
}

fn read_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_every_channel() {
        let config = FrontendConfig::default();
        assert!(config.accepts_channel("general"));
        assert_eq!(config.list_chunk_size, 8);
    }

    #[test]
    fn restricted_channel() {
        let config = FrontendConfig {
            allowed_channel: Some("bot".to_string()),
            ..Default::default()
        };
        assert!(config.accepts_channel("bot"));
        assert!(!config.accepts_channel("general"));
    }

    #[test]
    fn lookup_overrides() {
        let config = FrontendConfig::from_lookup(|key| match key {
            "ALLOWED_CHANNEL" => Some("bot".to_string()),
            "LIST_CHUNK_SIZE" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config.allowed_channel.as_deref(), Some("bot"));
        assert_eq!(config.list_chunk_size, 1);

        let blank = FrontendConfig::from_lookup(|key| {
            (key == "ALLOWED_CHANNEL").then(|| "  ".to_string())
        });
        assert_eq!(blank.allowed_channel, None);
    }
}
