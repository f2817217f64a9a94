//! Deliver finished report text through a Slack incoming webhook.
//!
//! Incoming webhooks sit outside the Web API proper: the URL itself is the
//! credential, and the response body is plain text rather than an `ok`
//! envelope, so delivery success is judged on the HTTP status alone.

use crate::config::PostConfig;
use serde::Serialize;
use std::fmt;
use url::Url;

/// A client for one pre-configured webhook URL.
pub struct Webhook {
    url: Url,
    http: reqwest::Client,
}

/// The JSON payload of a webhook delivery.
///
/// <https://api.slack.com/messaging/webhooks#advanced_message_formatting>
#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
    channel: &'a str,
    username: &'a str,
    icon_emoji: &'a str,
}

/// Sum type representing every possible unexceptional fail state of a
/// delivery.
#[derive(Debug)]
pub enum WebhookError {
    RequestFailed(reqwest::Error),
    BadStatus(reqwest::StatusCode),
}

impl From<reqwest::Error> for WebhookError {
    fn from(e: reqwest::Error) -> Self {
        WebhookError::RequestFailed(e)
    }
}

impl fmt::Display for WebhookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            WebhookError::RequestFailed(e) => format!("Webhook request failed: {:?}", e),
            WebhookError::BadStatus(s) => format!("Webhook returned status: {}", s),
        };

        write!(f, "{}", x)
    }
}

impl Webhook {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            http: reqwest::Client::new(),
        }
    }

    /// Post `text` to the webhook, addressed and attributed per `post`.
    pub async fn notify(&self, text: &str, post: &PostConfig) -> Result<(), WebhookError> {
        let res = self
            .http
            .post(self.url.clone())
            .json(&WebhookPayload {
                text,
                channel: &post.channel,
                username: &post.username,
                icon_emoji: &post.icon_emoji,
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(WebhookError::BadStatus(res.status()));
        }

        Ok(())
    }
}
