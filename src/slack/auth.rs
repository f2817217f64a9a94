//! Helpers around Slack's use of OAuth Bearer Authentication.

use serde::Deserialize;

/// A newtype wrapper around Slack access tokens.
// `Deserialize` lets the token be read straight out of the credentials
// file without an intermediate string field.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SlackAccessToken(pub String);

/// Convert a Slack access token to a `Bearer` `Authorization` header value.
///
/// ```
/// let token = SlackAccessToken("xoxb-foo".into());
/// assert_eq!(to_auth_header_val(&token), "Bearer xoxb-foo");
/// ```
pub fn to_auth_header_val(t: &SlackAccessToken) -> String {
    format!("Bearer {}", t.0)
}
