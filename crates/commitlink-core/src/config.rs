use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CommitlinkError;

/// Top-level configuration loaded from `.commitlink.toml`.
///
/// Every field is required; a missing field is a fatal startup error.
/// There are no defaults: the tool refuses to guess which tracker,
/// repository, or output location a research run should use.
///
/// # Examples
///
/// ```
/// use commitlink_core::CommitlinkConfig;
///
/// let toml = r#"
/// [tracker]
/// base_url = "https://issues.example.org"
/// projects = ["PROJ"]
/// issue_types = ["Bug"]
/// statuses = ["Resolved"]
/// resolutions = ["Fixed"]
/// created_before_days = 90
///
/// [repo]
/// remote_url = "https://example.org/proj.git"
/// local_dir = "local_repo"
/// marker = "PROJ"
///
/// [output]
/// dir = "output"
/// "#;
/// let config = CommitlinkConfig::from_toml(toml).unwrap();
/// assert_eq!(config.tracker.created_before_days, 90);
/// assert_eq!(config.repo.marker, "PROJ");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitlinkConfig {
    /// Issue tracker endpoint and query filters.
    pub tracker: TrackerConfig,
    /// Source repository location and commit selection marker.
    pub repo: RepoConfig,
    /// Output artifact location.
    pub output: OutputConfig,
}

impl CommitlinkConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CommitlinkError::Io`] if the file cannot be read, or
    /// [`CommitlinkError::Toml`] if the content is not valid TOML or a
    /// required field is missing.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use commitlink_core::CommitlinkConfig;
    /// use std::path::Path;
    ///
    /// let config = CommitlinkConfig::from_file(Path::new(".commitlink.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, CommitlinkError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`CommitlinkError::Toml`] if parsing fails.
    pub fn from_toml(content: &str) -> Result<Self, CommitlinkError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// Issue tracker endpoint and query filter parameters.
///
/// The list fields are conjoined into the tracker query: an issue matches
/// when its project, type, status, and resolution are each in the
/// corresponding set, and it was created more than `created_before_days`
/// days ago.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Base URL of the tracker, e.g. `https://issues.apache.org/jira`.
    pub base_url: String,
    /// Project keys to include.
    pub projects: Vec<String>,
    /// Issue types to include, e.g. `["Bug"]`.
    pub issue_types: Vec<String>,
    /// Workflow statuses to include, e.g. `["Resolved", "Closed"]`.
    pub statuses: Vec<String>,
    /// Resolutions to include, e.g. `["Fixed"]`.
    pub resolutions: Vec<String>,
    /// Initial cutoff: only issues created more than this many days ago.
    pub created_before_days: i64,
}

/// Source repository location and commit selection marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Remote URL to clone or pull from.
    pub remote_url: String,
    /// Local working copy directory.
    pub local_dir: String,
    /// Substring a commit message must contain to be considered
    /// project-related, e.g. the project key `"PROJ"`.
    pub marker: String,
}

/// Output artifact location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the issues, commits, and final dataset CSVs are written
    /// to. Created if absent.
    pub dir: String,
}
