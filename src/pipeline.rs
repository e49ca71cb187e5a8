use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::badge;
use crate::config::Config;
use crate::duration::CalendarDuration;
use crate::github::GithubClient;
use crate::readme::{self, PatchOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub join_date: DateTime<Utc>,
    pub duration: CalendarDuration,
    pub duration_text: String,
    pub outcome: PatchOutcome,
}

/// Look up the join date, measure it against `now`, and rewrite the README.
pub async fn run(config: &Config, now: DateTime<Utc>) -> Result<RunReport> {
    let client = GithubClient::new(config)?;

    let join_date = client.join_date(&config.username).await?;
    tracing::info!(user = %config.username, %join_date, "Fetched account creation date");

    let duration = CalendarDuration::between(join_date, now)?;
    let duration_text = duration.to_string();

    let section = badge::render_section(&duration_text, join_date);
    let outcome = readme::update_readme(&config.readme_path, &section)?;

    if outcome == PatchOutcome::Updated {
        tracing::info!("Updated README with membership duration: {duration_text}");
    }

    Ok(RunReport {
        join_date,
        duration,
        duration_text,
        outcome,
    })
}
