//! Deserialization helpers for fields whose value is part of the contract.

use serde::de::{Deserialize, Deserializer, Error};

/// Accept only a literal `true`, failing deserialization otherwise. Applied
/// to the `ok` field of success envelopes so that an error response can
/// never masquerade as an empty success.
pub fn only_true<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    bool::deserialize(deserializer).and_then(|b| {
        if b {
            Ok(b)
        } else {
            Err(Error::custom("invalid bool: false"))
        }
    })
}

/// The mirror image of [only_true], for the `ok` field of error envelopes.
pub fn only_false<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    bool::deserialize(deserializer).and_then(|b| {
        if b {
            Err(Error::custom("invalid bool: true"))
        } else {
            Ok(b)
        }
    })
}
