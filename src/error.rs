use crate::{config::ConfigError, slack::error::SlackError, slack::webhook::WebhookError};
use std::fmt;

/// Sum type representing every possible unexceptional fail state of a run.
#[derive(Debug)]
pub enum Failure {
    Config(ConfigError),
    Slack(SlackError),
    Webhook(WebhookError),
}

impl From<ConfigError> for Failure {
    fn from(e: ConfigError) -> Self {
        Failure::Config(e)
    }
}

impl From<SlackError> for Failure {
    fn from(e: SlackError) -> Self {
        Failure::Slack(e)
    }
}

impl From<WebhookError> for Failure {
    fn from(e: WebhookError) -> Self {
        Failure::Webhook(e)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            Failure::Config(e) => e.to_string(),
            Failure::Slack(e) => e.to_string(),
            Failure::Webhook(e) => e.to_string(),
        };

        write!(f, "{}", x)
    }
}
