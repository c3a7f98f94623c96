/// Errors that can occur across the commitlink pipeline.
///
/// Each variant wraps a specific error domain. Library crates use this type
/// directly; the binary crate converts to `miette` diagnostics at the
/// boundary. No stage retries: any error aborts the run.
///
/// # Examples
///
/// ```
/// use commitlink_core::CommitlinkError;
///
/// let err = CommitlinkError::Config("missing tracker URL".into());
/// assert!(err.to_string().contains("missing tracker URL"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum CommitlinkError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Git operation failure (clone, fetch, merge, or history walk).
    #[error("git error: {0}")]
    Git(String),

    /// Issue tracker query or connectivity failure.
    #[error("tracker error: {0}")]
    Tracker(String),

    /// CSV read / write failure, including a missing expected column.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CommitlinkError = io_err.into();
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn config_error_displays_message() {
        let err = CommitlinkError::Config("bad value".into());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn tracker_error_displays_message() {
        let err = CommitlinkError::Tracker("401 Unauthorized".into());
        assert_eq!(err.to_string(), "tracker error: 401 Unauthorized");
    }
}
