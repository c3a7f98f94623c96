//! Commit selection from repository history.
//!
//! Walks history oldest-to-newest and keeps the commits that reference
//! the project marker and purely introduce code: zero deleted lines and
//! at least one added line across every file the commit touches. This
//! excludes refactors and reverts, which confuse issue-to-commit
//! correlation.

use std::path::Path;

use commitlink_core::{CommitRecord, CommitlinkError};
use git2::{Repository, Sort};

/// History start bound: 2000-01-01T00:00:00Z. Commits older than this are
/// ignored.
pub const HISTORY_START: i64 = 946_684_800;

/// Select the project-related, purely-additive commits from the
/// repository at `repo_path`.
///
/// A commit is kept iff its message contains `marker`, the sum of deleted
/// lines across all files it modifies is zero, and the sum of added lines
/// is greater than zero. Commits are returned in chronological order
/// (oldest first) with their full hash and full message.
///
/// # Errors
///
/// Returns [`CommitlinkError::Git`] if `repo_path` is not a valid
/// repository or history cannot be walked.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use commitlink_scm::filter::collect_commits;
///
/// let commits = collect_commits(Path::new("local_repo"), "PROJ").unwrap();
/// for c in &commits {
///     println!("{}: {}", &c.hash[..7], c.message.lines().next().unwrap_or(""));
/// }
/// ```
pub fn collect_commits(repo_path: &Path, marker: &str) -> Result<Vec<CommitRecord>, CommitlinkError> {
    let repo = Repository::open(repo_path).map_err(|e| {
        CommitlinkError::Git(format!(
            "failed to open repository at {}: {e}",
            repo_path.display()
        ))
    })?;

    let mut revwalk = repo
        .revwalk()
        .map_err(|e| CommitlinkError::Git(format!("failed to create revwalk: {e}")))?;
    revwalk.set_sorting(Sort::TIME | Sort::REVERSE).ok();
    revwalk
        .push_head()
        .map_err(|e| CommitlinkError::Git(format!("failed to push HEAD: {e}")))?;

    let mut commits = Vec::new();
    for oid_result in revwalk {
        let oid = oid_result.map_err(|e| CommitlinkError::Git(format!("revwalk error: {e}")))?;
        let commit = repo
            .find_commit(oid)
            .map_err(|e| CommitlinkError::Git(format!("failed to find commit: {e}")))?;

        if commit.time().seconds() < HISTORY_START {
            continue;
        }

        let message = commit.message().unwrap_or("").to_string();
        if !message.contains(marker) {
            continue;
        }

        let (added, deleted) = count_lines(&repo, &commit)?;
        if deleted == 0 && added > 0 {
            commits.push(CommitRecord {
                hash: oid.to_string(),
                message,
            });
        }
    }

    Ok(commits)
}

/// Total lines added and deleted by a commit, diffed against its first
/// parent (the empty tree for root commits).
fn count_lines(repo: &Repository, commit: &git2::Commit) -> Result<(usize, usize), CommitlinkError> {
    let commit_tree = commit
        .tree()
        .map_err(|e| CommitlinkError::Git(format!("failed to get commit tree: {e}")))?;

    let parent_tree = if commit.parent_count() > 0 {
        let parent = commit
            .parent(0)
            .map_err(|e| CommitlinkError::Git(format!("failed to get parent: {e}")))?;
        Some(
            parent
                .tree()
                .map_err(|e| CommitlinkError::Git(format!("failed to get parent tree: {e}")))?,
        )
    } else {
        None
    };

    let diff = repo
        .diff_tree_to_tree(parent_tree.as_ref(), Some(&commit_tree), None)
        .map_err(|e| CommitlinkError::Git(format!("failed to compute diff: {e}")))?;

    let stats = diff
        .stats()
        .map_err(|e| CommitlinkError::Git(format!("failed to compute diff stats: {e}")))?;

    Ok((stats.insertions(), stats.deletions()))
}
