use serde::{Deserialize, Serialize};

/// An issue-tracker record as persisted to the issues table.
///
/// Identity is `id` (the tracker's internal numeric identifier); `key` is
/// the human-readable per-project identifier commit messages reference,
/// e.g. `"PROJ-123"`. The serde renames pin the exact CSV column names.
///
/// # Examples
///
/// ```
/// use commitlink_core::IssueRecord;
///
/// let issue = IssueRecord {
///     id: "12345".into(),
///     key: "PROJ-1".into(),
///     summary: "NPE on startup".into(),
///     description: None,
/// };
/// assert_eq!(issue.key, "PROJ-1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Tracker-internal unique identifier.
    #[serde(rename = "ITS_id")]
    pub id: String,
    /// Human-readable issue key, unique per project.
    #[serde(rename = "ITS_key")]
    pub key: String,
    /// One-line summary.
    #[serde(rename = "ITS_summary")]
    pub summary: String,
    /// Free-text description; empty CSV cell when absent.
    #[serde(rename = "ITS_description")]
    pub description: Option<String>,
}

/// A selected commit as persisted to the commits table.
///
/// # Examples
///
/// ```
/// use commitlink_core::CommitRecord;
///
/// let commit = CommitRecord {
///     hash: "a1b2c3".into(),
///     message: "PROJ-1 add regression test".into(),
/// };
/// assert!(commit.message.contains("PROJ-1"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full commit hash.
    #[serde(rename = "SCM_hash")]
    pub hash: String,
    /// Full commit message.
    #[serde(rename = "SCM_message")]
    pub message: String,
}

/// One row of the final joined dataset: an issue paired with a commit
/// whose message references the issue's key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelatedRecord {
    /// Tracker-internal unique identifier.
    #[serde(rename = "ITS_id")]
    pub issue_id: String,
    /// Human-readable issue key.
    #[serde(rename = "ITS_key")]
    pub issue_key: String,
    /// Issue summary.
    #[serde(rename = "ITS_summary")]
    pub issue_summary: String,
    /// Issue description, if any.
    #[serde(rename = "ITS_description")]
    pub issue_description: Option<String>,
    /// Hash of the matching commit.
    #[serde(rename = "SCM_hash")]
    pub commit_hash: String,
    /// Message of the matching commit.
    #[serde(rename = "SCM_msg")]
    pub commit_message: String,
}

impl CorrelatedRecord {
    /// Combine an issue with a matching commit into one dataset row.
    pub fn join(issue: &IssueRecord, commit: &CommitRecord) -> Self {
        Self {
            issue_id: issue.id.clone(),
            issue_key: issue.key.clone(),
            issue_summary: issue.summary.clone(),
            issue_description: issue.description.clone(),
            commit_hash: commit.hash.clone(),
            commit_message: commit.message.clone(),
        }
    }
}
