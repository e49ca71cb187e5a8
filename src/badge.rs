use chrono::{DateTime, Utc};

pub const START_MARKER: &str = "<!-- GITHUB-STATS:START -->";
pub const END_MARKER: &str = "<!-- GITHUB-STATS:END -->";

const BADGE_BASE: &str = "https://img.shields.io/badge/GitHub%20Member";
const BADGE_QUERY: &str = "blue?style=flat-square&logo=github";

// Utilities for building the badge block

/// Percent-encodes a badge label so it can sit in a shields.io path segment.
pub fn encode_badge_text(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// "March 05, 2012"
pub fn member_since(join_date: DateTime<Utc>) -> String {
    join_date.format("%B %d, %Y").to_string()
}

pub fn badge_url(duration_text: &str) -> String {
    format!(
        "{BADGE_BASE}-{}-{BADGE_QUERY}",
        encode_badge_text(duration_text)
    )
}

/// The full marker block, start and end markers included.
pub fn render_section(duration_text: &str, join_date: DateTime<Utc>) -> String {
    format!(
        "{START_MARKER}\n\
         <img src=\"{}\" alt=\"GitHub Membership\" />\n\
         \n\
         *Member since {}*\n\
         {END_MARKER}",
        badge_url(duration_text),
        member_since(join_date)
    )
}
