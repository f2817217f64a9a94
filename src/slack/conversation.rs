//! Enumerate the conversations visible to a credential.
//!
//! The workspace API splits conversations by visibility: public channels
//! and private groups each have their own method family, as in
//! `channels.list` and `groups.list`.

use super::{
    api::{APIResult, SlackClient},
    auth::SlackAccessToken,
    error::SlackError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversations are referred to by an opaque ID on every onward API call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub String);

/// Format without the surrounding newtype wrapper.
impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the public/private split a conversation falls on. Picks
/// the method family used to list it and to read its history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversationKind {
    Channel,
    Group,
}

impl ConversationKind {
    /// The method-family prefix, as in `channels.history`.
    pub(super) fn family(self) -> &'static str {
        match self {
            ConversationKind::Channel => "channels",
            ConversationKind::Group => "groups",
        }
    }
}

/// The metadata we care about per conversation within [ListResponse].
#[derive(Clone, Debug, Deserialize)]
pub struct ConversationMeta {
    pub id: ConversationId,
    pub name: String,
}

/// Both list endpoints share a shape; only the key naming the collection
/// differs.
#[derive(Deserialize)]
struct ListResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    #[serde(alias = "groups")]
    channels: Vec<ConversationMeta>,
}

impl SlackClient {
    /// List every conversation of the given kind visible to the token.
    ///
    /// A single response is taken at face value; neither endpoint is
    /// paginated here.
    pub async fn list_conversations(
        &self,
        kind: ConversationKind,
        token: &SlackAccessToken,
    ) -> Result<Vec<ConversationMeta>, SlackError> {
        let res: APIResult<ListResponse> = self
            .get(&format!("/{}.list", kind.family()), token)
            .send()
            .await?
            .json()
            .await?;

        match res {
            APIResult::Ok(res) => Ok(res.channels),
            APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
        }
    }
}
