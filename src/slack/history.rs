//! Fetch recent conversation history and the reaction data carried on it.

use super::{
    api::{APIResult, SlackClient},
    auth::SlackAccessToken,
    conversation::{ConversationId, ConversationKind},
    error::SlackError,
};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::fmt;

/// Seconds since the Unix epoch. Slack encodes message timestamps as
/// strings on the wire, e.g. `"1610000000.000100"`.
#[serde_as]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Timestamp(#[serde_as(as = "DisplayFromStr")] pub f64);

/// A reaction emoji's short name, without the surrounding colons.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct EmojiName(pub String);

/// Format without the surrounding newtype wrapper.
impl fmt::Display for EmojiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An emoji reaction as it appears attached to a history message: the
/// emoji and how many users applied it.
#[derive(Clone, Debug, Deserialize)]
pub struct Reaction {
    pub name: EmojiName,
    pub count: u64,
}

/// The slice of a history message the tally cares about. Messages nobody
/// has reacted to come over the wire without a `reactions` field at all.
#[derive(Clone, Debug, Deserialize)]
pub struct Message {
    pub ts: Timestamp,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

/// The maximum page size the history endpoints accept, and the only page
/// the report ever reads.
const HISTORY_PAGE_LIMIT: u16 = 1000;

/// <https://api.slack.com/methods/channels.history#args>
#[derive(Serialize)]
struct HistoryRequest<'a> {
    channel: &'a ConversationId,
    count: u16,
    oldest: Timestamp,
}

/// <https://api.slack.com/methods/channels.history#examples>
#[derive(Deserialize)]
struct HistoryResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    /// Absent when a conversation has no messages in the window.
    #[serde(default)]
    messages: Vec<Message>,
}

impl SlackClient {
    /// Retrieve the most recent messages in a conversation, none older
    /// than `oldest`, up to one full page.
    pub async fn fetch_history(
        &self,
        kind: ConversationKind,
        id: &ConversationId,
        oldest: Timestamp,
        token: &SlackAccessToken,
    ) -> Result<Vec<Message>, SlackError> {
        let res: APIResult<HistoryResponse> = self
            .get(&format!("/{}.history", kind.family()), token)
            .query(&HistoryRequest {
                channel: id,
                count: HISTORY_PAGE_LIMIT,
                oldest,
            })
            .send()
            .await?
            .json()
            .await?;

        match res {
            APIResult::Ok(res) => Ok(res.messages),
            APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
        }
    }
}
