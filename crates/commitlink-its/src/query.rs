//! JQL query construction and creation-timestamp arithmetic.

use chrono::{DateTime, FixedOffset, Utc};
use commitlink_core::{CommitlinkError, TrackerConfig};

/// Build the JQL filter for one retrieval round.
///
/// Conjoins the configured project, type, status, and resolution sets with
/// a `created < startOfDay(-{cutoff_days}d)` bound, ordered by creation
/// time descending so each page ends with its oldest record.
///
/// # Examples
///
/// ```
/// use commitlink_core::TrackerConfig;
/// use commitlink_its::query::build_jql;
///
/// let tracker = TrackerConfig {
///     base_url: "https://issues.example.org".into(),
///     projects: vec!["PROJ".into()],
///     issue_types: vec!["Bug".into()],
///     statuses: vec!["Resolved".into()],
///     resolutions: vec!["Fixed".into()],
///     created_before_days: 90,
/// };
/// let jql = build_jql(&tracker, 90);
/// assert!(jql.contains("created < startOfDay(-90d)"));
/// assert!(jql.ends_with("ORDER BY created DESC"));
/// ```
pub fn build_jql(tracker: &TrackerConfig, cutoff_days: i64) -> String {
    format!(
        "project in ({}) AND issuetype in ({}) AND status in ({}) AND resolution in ({}) \
         AND created < startOfDay(-{}d) ORDER BY created DESC",
        tracker.projects.join(","),
        tracker.issue_types.join(","),
        tracker.statuses.join(","),
        tracker.resolutions.join(","),
        cutoff_days,
    )
}

/// Whole days elapsed between an issue's `created` timestamp and now.
///
/// # Errors
///
/// Returns [`CommitlinkError::Tracker`] if the timestamp cannot be parsed.
pub fn days_since(created: &str) -> Result<i64, CommitlinkError> {
    days_between(created, Utc::now())
}

pub(crate) fn days_between(created: &str, now: DateTime<Utc>) -> Result<i64, CommitlinkError> {
    let created = parse_created(created)?;
    Ok((now - created.with_timezone(&Utc)).num_days())
}

/// Parse a Jira creation timestamp.
///
/// Jira servers emit `2012-01-17T10:20:30.000+0000`; RFC 3339 is accepted
/// as well.
fn parse_created(created: &str) -> Result<DateTime<FixedOffset>, CommitlinkError> {
    DateTime::parse_from_rfc3339(created)
        .or_else(|_| DateTime::parse_from_str(created, "%Y-%m-%dT%H:%M:%S%.3f%z"))
        .map_err(|e| {
            CommitlinkError::Tracker(format!("unparseable created timestamp '{created}': {e}"))
        })
}
