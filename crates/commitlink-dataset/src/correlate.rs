//! The issue-to-commit join.
//!
//! Every issue is tested against every commit message, an O(I×C) scan.
//! The only disambiguation rule is the digit lookahead in
//! [`key_matches`]: without it, key `PROJ-1` would also claim commits
//! referencing `PROJ-10` through `PROJ-19`.

use commitlink_core::{CommitRecord, CorrelatedRecord, IssueRecord};

/// Test whether `message` references `key`.
///
/// Scans for the first occurrence of `key` as a contiguous substring. A
/// match counts only if the character immediately after the matched span
/// is absent or not an ASCII digit, so a shorter key never matches as a
/// numeric prefix of a longer one.
///
/// # Examples
///
/// ```
/// use commitlink_dataset::key_matches;
///
/// assert!(key_matches("fixes PROJ-1 today", "PROJ-1"));
/// assert!(key_matches("fixes PROJ-1", "PROJ-1"));
/// assert!(!key_matches("fixes PROJ-10", "PROJ-1"));
/// ```
pub fn key_matches(message: &str, key: &str) -> bool {
    let Some(index) = message.find(key) else {
        return false;
    };
    match message[index + key.len()..].chars().next() {
        Some(next) => !next.is_ascii_digit(),
        None => true,
    }
}

/// Join issues against commits, producing one dataset row per matching
/// (issue, commit) pair.
///
/// Outer loop over issues in stored order, inner loop over commits in
/// stored order; rows are emitted in that nested order. An issue with no
/// matching commit contributes nothing; a commit referencing several
/// issues appears in several rows. Deterministic: identical inputs yield
/// an identical table.
///
/// # Examples
///
/// ```
/// use commitlink_core::{CommitRecord, IssueRecord};
/// use commitlink_dataset::correlate;
///
/// let issues = vec![IssueRecord {
///     id: "1".into(),
///     key: "PROJ-1".into(),
///     summary: "bug".into(),
///     description: None,
/// }];
/// let commits = vec![CommitRecord {
///     hash: "abc".into(),
///     message: "fix for PROJ-1 bug".into(),
/// }];
/// let dataset = correlate(&issues, &commits);
/// assert_eq!(dataset.len(), 1);
/// assert_eq!(dataset[0].commit_hash, "abc");
/// ```
pub fn correlate(issues: &[IssueRecord], commits: &[CommitRecord]) -> Vec<CorrelatedRecord> {
    let mut dataset = Vec::new();
    for issue in issues {
        for commit in commits {
            if key_matches(&commit.message, &issue.key) {
                dataset.push(CorrelatedRecord::join(issue, commit));
            }
        }
    }
    dataset
}
