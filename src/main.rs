//! Tally emoji-reaction usage across a Slack workspace over a trailing
//! window of days, and post the ranking to an incoming webhook.
//!
//! One linear run: enumerate conversations, fetch recent history, tally,
//! render, notify, exit.

use chrono::{Duration, Utc};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tracing::error;

use config::Config;
use error::Failure;
use pipeline::Deps;
use slack::api::{SlackClient, API_BASE};
use slack::history::Timestamp;
use slack::webhook::Webhook;

mod config;
mod de;
mod error;
mod pipeline;
mod report;
mod slack;
mod tally;

/// Count workspace emoji reactions and post the ranking to a webhook.
#[derive(Parser)]
#[command(name = "emoji-tally", version)]
struct Cli {
    /// How many days back the tally window extends
    #[arg(short, long)]
    days: i64,

    /// Path to the credentials file
    #[arg(short, long, default_value = "config/private/slack.toml")]
    config: PathBuf,
}

/// Application entrypoint. Initialises tracing, then runs the pipeline
/// once, exiting non-zero on any failure.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    match try_main(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn try_main(cli: Cli) -> Result<(), Failure> {
    let config = Config::load_from(&cli.config)?;

    let cutoff = Timestamp((Utc::now() - Duration::days(cli.days)).timestamp() as f64);

    let deps = Deps {
        slack: SlackClient::new(API_BASE.into()),
        webhook: Webhook::new(config.post.url.clone()),
    };

    pipeline::run(&deps, &config, cutoff).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_flag_is_required() {
        assert!(Cli::try_parse_from(["emoji-tally"]).is_err());
    }

    #[test]
    fn test_days_flag_must_be_numeric() {
        assert!(Cli::try_parse_from(["emoji-tally", "--days", "week"]).is_err());
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from(["emoji-tally", "-d", "7", "-c", "creds.toml"]).unwrap();

        assert_eq!(cli.days, 7);
        assert_eq!(cli.config, PathBuf::from("creds.toml"));
    }

    #[test]
    fn test_config_path_default() {
        let cli = Cli::try_parse_from(["emoji-tally", "--days", "30"]).unwrap();

        assert_eq!(cli.config, PathBuf::from("config/private/slack.toml"));
    }
}
