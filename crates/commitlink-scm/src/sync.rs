//! Local working copy synchronization via git2.

use std::path::Path;

use commitlink_core::CommitlinkError;
use git2::build::CheckoutBuilder;
use git2::Repository;

/// Ensure `local_dir` holds an up-to-date clone of `remote_url`.
///
/// If `local_dir` is not an existing git repository, a full clone is
/// performed. Otherwise the configured `origin` remote is fetched and the
/// current branch is fast-forwarded to the fetched head. Already up to
/// date is a no-op; a history that cannot be fast-forwarded is an error
/// rather than an attempted merge.
///
/// # Errors
///
/// Returns [`CommitlinkError::Git`] if the remote is unreachable, the
/// local directory is not a valid repository, or the merge cannot
/// fast-forward. Never retried.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use commitlink_scm::sync::clone_or_pull;
///
/// clone_or_pull("https://example.org/proj.git", Path::new("local_repo")).unwrap();
/// ```
pub fn clone_or_pull(remote_url: &str, local_dir: &Path) -> Result<(), CommitlinkError> {
    if local_dir.join(".git").exists() {
        pull(local_dir)
    } else {
        Repository::clone(remote_url, local_dir)
            .map_err(|e| CommitlinkError::Git(format!("failed to clone {remote_url}: {e}")))?;
        Ok(())
    }
}

fn pull(local_dir: &Path) -> Result<(), CommitlinkError> {
    let repo = Repository::open(local_dir).map_err(|e| {
        CommitlinkError::Git(format!(
            "failed to open repository at {}: {e}",
            local_dir.display()
        ))
    })?;

    let mut remote = repo
        .find_remote("origin")
        .map_err(|e| CommitlinkError::Git(format!("no origin remote: {e}")))?;
    remote
        .fetch(&[] as &[&str], None, None)
        .map_err(|e| CommitlinkError::Git(format!("fetch failed: {e}")))?;

    let fetch_head = repo
        .find_reference("FETCH_HEAD")
        .map_err(|e| CommitlinkError::Git(format!("no FETCH_HEAD after fetch: {e}")))?;
    let fetch_commit = repo
        .reference_to_annotated_commit(&fetch_head)
        .map_err(|e| CommitlinkError::Git(format!("failed to resolve FETCH_HEAD: {e}")))?;

    let (analysis, _) = repo
        .merge_analysis(&[&fetch_commit])
        .map_err(|e| CommitlinkError::Git(format!("merge analysis failed: {e}")))?;

    if analysis.is_up_to_date() {
        return Ok(());
    }
    if !analysis.is_fast_forward() {
        return Err(CommitlinkError::Git(
            "local branch has diverged from origin; cannot fast-forward".into(),
        ));
    }

    let head = repo
        .head()
        .map_err(|e| CommitlinkError::Git(format!("failed to read HEAD: {e}")))?;
    let refname = head
        .name()
        .ok_or_else(|| CommitlinkError::Git("HEAD is not a named reference".into()))?
        .to_string();

    let mut reference = repo
        .find_reference(&refname)
        .map_err(|e| CommitlinkError::Git(format!("failed to find {refname}: {e}")))?;
    reference
        .set_target(fetch_commit.id(), "fast-forward")
        .map_err(|e| CommitlinkError::Git(format!("failed to advance {refname}: {e}")))?;
    repo.set_head(&refname)
        .map_err(|e| CommitlinkError::Git(format!("failed to set HEAD: {e}")))?;
    repo.checkout_head(Some(CheckoutBuilder::default().force()))
        .map_err(|e| CommitlinkError::Git(format!("checkout failed: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;

    fn commit_file(repo: &Repository, name: &str, content: &str, message: &str) {
        let workdir = repo.workdir().unwrap();
        std::fs::write(workdir.join(name), content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("tester", "tester@example.org").unwrap();
        let parent = repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    #[test]
    fn clone_when_local_dir_is_absent() {
        let upstream_dir = tempfile::tempdir().unwrap();
        let upstream = Repository::init(upstream_dir.path()).unwrap();
        commit_file(&upstream, "a.txt", "one\n", "initial");

        let work = tempfile::tempdir().unwrap();
        let local = work.path().join("local_repo");
        clone_or_pull(upstream_dir.path().to_str().unwrap(), &local).unwrap();

        let cloned = Repository::open(&local).unwrap();
        let head = cloned.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.message(), Some("initial"));
    }

    #[test]
    fn pull_fast_forwards_existing_clone() {
        let upstream_dir = tempfile::tempdir().unwrap();
        let upstream = Repository::init(upstream_dir.path()).unwrap();
        commit_file(&upstream, "a.txt", "one\n", "initial");

        let work = tempfile::tempdir().unwrap();
        let local = work.path().join("local_repo");
        let url = upstream_dir.path().to_str().unwrap().to_string();
        clone_or_pull(&url, &local).unwrap();

        commit_file(&upstream, "b.txt", "two\n", "second");
        clone_or_pull(&url, &local).unwrap();

        let cloned = Repository::open(&local).unwrap();
        let head = cloned.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.message(), Some("second"));
    }

    #[test]
    fn pull_on_up_to_date_clone_is_a_no_op() {
        let upstream_dir = tempfile::tempdir().unwrap();
        let upstream = Repository::init(upstream_dir.path()).unwrap();
        commit_file(&upstream, "a.txt", "one\n", "initial");

        let work = tempfile::tempdir().unwrap();
        let local = work.path().join("local_repo");
        let url = upstream_dir.path().to_str().unwrap().to_string();
        clone_or_pull(&url, &local).unwrap();
        clone_or_pull(&url, &local).unwrap();

        let cloned = Repository::open(&local).unwrap();
        let head = cloned.head().unwrap().peel_to_commit().unwrap();
        assert_eq!(head.message(), Some("initial"));
    }

    #[test]
    fn unreachable_remote_is_fatal() {
        let work = tempfile::tempdir().unwrap();
        let local = work.path().join("local_repo");
        let result = clone_or_pull("/nonexistent/upstream.git", &local);
        assert!(matches!(result, Err(CommitlinkError::Git(_))));
    }
}
