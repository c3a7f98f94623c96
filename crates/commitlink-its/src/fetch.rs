//! Exhaustive retrieval via pagination-by-re-windowing.
//!
//! The tracker enforces a hard per-request cap ([`PAGE_SIZE`]). Results
//! are ordered newest-first, so after a full page the cutoff is re-derived
//! from the age of the page's last (oldest) record and the query is
//! re-issued. The window only moves toward older records, so the loop
//! terminates once a page comes back short. A boundary record can appear
//! in two consecutive pages; [`collapse_consecutive`] drops exact adjacent
//! repeats when the accumulated list is converted for serialization.

use std::future::Future;

use commitlink_core::{IssueRecord, Result, TrackerConfig};

use crate::client::{FetchedIssue, JiraClient};
use crate::query;

/// Hard per-request result cap enforced by Jira servers.
pub const PAGE_SIZE: usize = 1000;

/// Retrieve every issue matching the configured filters.
///
/// Issues are returned in retrieval order: newest first, page by page.
///
/// # Errors
///
/// Any request failure or unparseable `created` timestamp aborts the
/// fetch; nothing is retried.
///
/// # Examples
///
/// ```no_run
/// use commitlink_core::TrackerConfig;
/// use commitlink_its::{fetch_all, JiraClient};
///
/// # async fn run(tracker: TrackerConfig) {
/// let client = JiraClient::new(&tracker.base_url);
/// let issues = fetch_all(&client, &tracker).await.unwrap();
/// println!("{} issues fetched", issues.len());
/// # }
/// ```
pub async fn fetch_all(
    client: &JiraClient,
    tracker: &TrackerConfig,
) -> Result<Vec<FetchedIssue>> {
    paginate(tracker.created_before_days, PAGE_SIZE, |cutoff_days| {
        let jql = query::build_jql(tracker, cutoff_days);
        async move { client.search(&jql, PAGE_SIZE).await }
    })
    .await
}

/// The re-windowing loop, generic over the page fetcher so the
/// termination and window-advance logic is testable without a tracker.
async fn paginate<F, Fut>(
    initial_cutoff_days: i64,
    page_size: usize,
    mut fetch_page: F,
) -> Result<Vec<FetchedIssue>>
where
    F: FnMut(i64) -> Fut,
    Fut: Future<Output = Result<Vec<FetchedIssue>>>,
{
    let mut cutoff_days = initial_cutoff_days;
    let mut issues: Vec<FetchedIssue> = Vec::new();

    loop {
        let page = fetch_page(cutoff_days).await?;
        let returned = page.len();
        issues.extend(page);

        if returned < page_size {
            break;
        }

        // Full page: the query may not be exhausted. Re-derive the window
        // from the page's oldest record.
        let Some(last) = issues.last() else { break };
        cutoff_days = query::days_since(&last.created)?;
    }

    Ok(issues)
}

/// Convert fetched issues to persisted records, dropping an issue whose
/// `id` equals that of the record kept immediately before it.
///
/// Only exact adjacent repeats are collapsed; duplicates separated by
/// other records survive. Same-instant creation timestamps spanning a
/// page boundary can therefore leave non-adjacent duplicates behind.
///
/// # Examples
///
/// ```
/// use commitlink_its::{collapse_consecutive, FetchedIssue};
///
/// let twice = FetchedIssue {
///     id: "1".into(),
///     key: "PROJ-1".into(),
///     summary: "s".into(),
///     description: None,
///     created: "2024-01-01T00:00:00.000+0000".into(),
/// };
/// let records = collapse_consecutive(&[twice.clone(), twice]);
/// assert_eq!(records.len(), 1);
/// ```
pub fn collapse_consecutive(issues: &[FetchedIssue]) -> Vec<IssueRecord> {
    let mut records: Vec<IssueRecord> = Vec::with_capacity(issues.len());
    for issue in issues {
        if let Some(previous) = records.last() {
            if previous.id == issue.id {
                continue;
            }
        }
        records.push(issue.to_record());
    }
    records
}
