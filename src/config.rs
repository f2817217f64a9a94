//! Credential and webhook configuration, read once at startup from a TOML
//! document and threaded through the pipeline explicitly.
//!
//! ```toml
//! token = "xoxp-..."
//! include_channels = false
//!
//! [post]
//! channel = "#general"
//! url = "https://hooks.slack.com/services/T000/B000/XXXX"
//! username = "emoji-tally"
//! icon_emoji = ":bar_chart:"
//! ```

use crate::slack::auth::SlackAccessToken;
use serde::Deserialize;
use std::{fmt, path::Path};
use url::Url;

#[derive(Deserialize)]
pub struct Config {
    /// The Web API credential used for listing conversations and reading
    /// history.
    pub token: SlackAccessToken,
    /// Whether public channel history contributes to the tally. Channels
    /// are enumerated and logged either way; only their history fetch is
    /// gated on this.
    #[serde(default)]
    pub include_channels: bool,
    /// Webhook delivery parameters.
    pub post: PostConfig,
}

/// Where and as whom the report is posted.
#[derive(Deserialize)]
pub struct PostConfig {
    pub channel: String,
    pub url: Url,
    pub username: String,
    pub icon_emoji: String,
}

/// Sum type representing every possible unexceptional fail state of a
/// config load. All of them are fatal at startup.
#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(toml::de::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Read(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            ConfigError::Read(e) => format!("Could not read credentials file: {}", e),
            ConfigError::Parse(e) => format!("Could not parse credentials file: {}", e),
        };

        write!(f, "{}", x)
    }
}

impl Config {
    /// Read and parse the credentials file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r##"
        token = "xoxp-secret"
        include_channels = true

        [post]
        channel = "#general"
        url = "https://hooks.slack.com/services/T000/B000/XXXX"
        username = "emoji-tally"
        icon_emoji = ":bar_chart:"
    "##;

    #[test]
    fn test_parses_full_document() {
        let config: Config = toml::from_str(FULL).unwrap();

        assert_eq!(config.token.0, "xoxp-secret");
        assert!(config.include_channels);
        assert_eq!(config.post.channel, "#general");
        assert_eq!(config.post.username, "emoji-tally");
        assert_eq!(config.post.icon_emoji, ":bar_chart:");
        assert_eq!(config.post.url.host_str(), Some("hooks.slack.com"));
    }

    #[test]
    fn test_include_channels_defaults_off() {
        let doc = r##"
            token = "xoxp-secret"

            [post]
            channel = "#general"
            url = "https://hooks.slack.com/services/T000/B000/XXXX"
            username = "emoji-tally"
            icon_emoji = ":bar_chart:"
        "##;

        let config: Config = toml::from_str(doc).unwrap();

        assert!(!config.include_channels);
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let doc = r##"
            [post]
            channel = "#general"
            url = "https://hooks.slack.com/services/T000/B000/XXXX"
            username = "emoji-tally"
            icon_emoji = ":bar_chart:"
        "##;

        assert!(toml::from_str::<Config>(doc).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let res = Config::load_from(Path::new("does/not/exist.toml"));

        assert!(matches!(res, Err(ConfigError::Read(_))));
    }
}
