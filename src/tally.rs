//! The aggregation core: fold per-message reaction counts into per-emoji
//! totals.

use crate::slack::history::{EmojiName, Message, Timestamp};
use std::collections::HashMap;

/// Reaction totals keyed by emoji name. Unordered; ranking is imposed only
/// at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally(HashMap<EmojiName, u64>);

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` uses of `name` to the running total.
    pub fn record(&mut self, name: &EmojiName, count: u64) {
        *self.0.entry(name.clone()).or_insert(0) += count;
    }

    /// Fold another tally into this one, summing counts on shared keys.
    pub fn merge(&mut self, other: Tally) {
        for (name, count) in other.0 {
            *self.0.entry(name).or_insert(0) += count;
        }
    }

    /// The total recorded against `name`, zero if it never appeared.
    #[cfg(test)]
    fn count(&self, name: &EmojiName) -> u64 {
        self.0.get(name).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries ordered by count descending. Emoji tied on count are
    /// ordered by name so the ranking is stable run to run.
    pub fn ranked(&self) -> Vec<(&EmojiName, u64)> {
        let mut xs: Vec<_> = self.0.iter().map(|(name, count)| (name, *count)).collect();
        xs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        xs
    }
}

/// Sum reaction counts by emoji across every message timestamped at or
/// after `cutoff`.
///
/// The filter applies per-message: a message from before the cutoff is
/// skipped wholesale, reactions and all, even though the history fetch
/// already bounds its page by the same instant.
pub fn tally_reactions(messages: &[Message], cutoff: Timestamp) -> Tally {
    let mut tally = Tally::new();

    for msg in messages {
        if msg.ts < cutoff {
            continue;
        }

        for reaction in &msg.reactions {
            tally.record(&reaction.name, reaction.count);
        }
    }

    tally
}
