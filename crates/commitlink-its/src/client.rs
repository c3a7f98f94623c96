//! Jira REST search client.

use commitlink_core::{CommitlinkError, IssueRecord};
use serde::Deserialize;

/// An issue as returned by the tracker, before persistence.
///
/// Carries the `created` timestamp the pagination loop needs to re-derive
/// its time window; the persisted [`IssueRecord`] drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedIssue {
    /// Tracker-internal unique identifier.
    pub id: String,
    /// Human-readable issue key, e.g. `"PROJ-123"`.
    pub key: String,
    /// One-line summary.
    pub summary: String,
    /// Free-text description, if any.
    pub description: Option<String>,
    /// Creation timestamp as the tracker reported it.
    pub created: String,
}

impl FetchedIssue {
    /// Convert to the persisted record shape, dropping `created`.
    pub fn to_record(&self) -> IssueRecord {
        IssueRecord {
            id: self.id.clone(),
            key: self.key.clone(),
            summary: self.summary.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    issues: Vec<RawIssue>,
}

#[derive(Deserialize)]
struct RawIssue {
    id: String,
    key: String,
    fields: RawFields,
}

#[derive(Deserialize)]
struct RawFields {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Option<String>,
    created: String,
}

impl From<RawIssue> for FetchedIssue {
    fn from(raw: RawIssue) -> Self {
        Self {
            id: raw.id,
            key: raw.key,
            summary: raw.fields.summary.unwrap_or_default(),
            description: raw.fields.description,
            created: raw.fields.created,
        }
    }
}

/// Client for the Jira REST search API.
///
/// # Examples
///
/// ```no_run
/// use commitlink_its::JiraClient;
///
/// # async fn run() {
/// let client = JiraClient::new("https://issues.apache.org/jira");
/// let page = client.search("project in (AMQ)", 1000).await.unwrap();
/// println!("{} issues", page.len());
/// # }
/// ```
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
}

impl JiraClient {
    /// Create a client for the tracker at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run one search request, returning at most `max_results` issues
    /// ordered as the query dictates.
    ///
    /// # Errors
    ///
    /// Returns [`CommitlinkError::Tracker`] on connectivity failure, a
    /// non-success HTTP status (including tracker-side JQL errors), or a
    /// response body that does not match the search schema.
    pub async fn search(
        &self,
        jql: &str,
        max_results: usize,
    ) -> Result<Vec<FetchedIssue>, CommitlinkError> {
        let url = format!("{}/rest/api/2/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("jql", jql),
                ("maxResults", &max_results.to_string()),
                ("fields", "summary,description,created"),
            ])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CommitlinkError::Tracker(format!("search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CommitlinkError::Tracker(format!(
                "tracker returned {status}: {body}"
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| CommitlinkError::Tracker(format!("malformed search response: {e}")))?;

        Ok(parsed.issues.into_iter().map(FetchedIssue::from).collect())
    }
}
