//! The end-to-end run: enumerate conversations, fetch their recent
//! history, tally reactions, and deliver the report.
//!
//! Private groups are read first, then public channels. Channel history is
//! only read when [Config::include_channels] is set, though channels are
//! enumerated and logged either way.

use crate::{
    config::Config,
    error::Failure,
    report::render_report,
    slack::{
        api::SlackClient,
        auth::SlackAccessToken,
        conversation::{ConversationKind, ConversationMeta},
        history::Timestamp,
        webhook::Webhook,
    },
    tally::{tally_reactions, Tally},
};
use tracing::{error, info, warn};

/// Dependencies threaded through a run, constructed once at startup.
pub struct Deps {
    pub slack: SlackClient,
    pub webhook: Webhook,
}

/// Execute one report run against `cutoff`.
pub async fn run(deps: &Deps, config: &Config, cutoff: Timestamp) -> Result<(), Failure> {
    let token = &config.token;
    let mut tally = Tally::new();

    let groups = deps
        .slack
        .list_conversations(ConversationKind::Group, token)
        .await?;
    collect(deps, ConversationKind::Group, &groups, cutoff, token, &mut tally).await;

    let channels = deps
        .slack
        .list_conversations(ConversationKind::Channel, token)
        .await?;
    for channel in &channels {
        info!("{} {}", channel.name, channel.id);
    }
    if config.include_channels {
        collect(
            deps,
            ConversationKind::Channel,
            &channels,
            cutoff,
            token,
            &mut tally,
        )
        .await;
    }

    let report = render_report(&tally);

    if let Err(e) = deps.webhook.notify(&report, &config.post).await {
        // Surface the computed report so a delivery failure doesn't
        // discard the tally.
        error!("Webhook delivery failed; computed report:\n{}", report);
        return Err(Failure::Webhook(e));
    }

    Ok(())
}

/// Fold each conversation's qualifying reactions into `tally`. A failed
/// history fetch skips that conversation rather than sinking the run.
async fn collect(
    deps: &Deps,
    kind: ConversationKind,
    conversations: &[ConversationMeta],
    cutoff: Timestamp,
    token: &SlackAccessToken,
    tally: &mut Tally,
) {
    for convo in conversations {
        match deps
            .slack
            .fetch_history(kind, &convo.id, cutoff, token)
            .await
        {
            Ok(messages) => tally.merge(tally_reactions(&messages, cutoff)),
            Err(e) => warn!("Skipping {} after history fetch failure: {}", convo.id, e),
        }
    }
}
