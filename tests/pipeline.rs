//! Offline end-to-end run of the commit filter, the CSV store, and the
//! correlator against a scratch repository. The tracker stage is covered
//! by its own crate's tests; here the issues table is seeded directly.

use std::path::Path;

use commitlink_core::IssueRecord;
use commitlink_dataset::{correlate, store};
use git2::{Repository, Signature};

fn commit_file(repo: &Repository, name: &str, content: &str, message: &str) {
    let workdir = repo.workdir().unwrap();
    std::fs::write(workdir.join(name), content).unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now("tester", "tester@example.org").unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}

fn issue(id: &str, key: &str) -> IssueRecord {
    IssueRecord {
        id: id.into(),
        key: key.into(),
        summary: format!("summary for {key}"),
        description: Some(format!("description for {key}")),
    }
}

#[test]
fn filter_store_and_join_produce_the_expected_dataset() {
    let repo_dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(repo_dir.path()).unwrap();
    commit_file(&repo, "fix.txt", "a fix\n", "fix for PROJ-1 bug");
    commit_file(&repo, "other.txt", "noise\n", "unrelated change");
    commit_file(&repo, "more.txt", "done\n", "PROJ-2 done, PROJ-20 pending");

    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("output");

    // Stage: commit filter. "unrelated change" lacks the marker.
    let commits = commitlink_scm::filter::collect_commits(repo_dir.path(), "PROJ").unwrap();
    assert_eq!(commits.len(), 2);
    store::write_commits(&out, &commits).unwrap();

    // Stage: issues table, seeded as a fetch would leave it.
    let issues = vec![issue("1", "PROJ-1"), issue("2", "PROJ-2")];
    store::write_issues(&out, &issues).unwrap();

    // Stage: correlate from the persisted tables.
    let issues = store::read_issues(&out).unwrap();
    let commits = store::read_commits(&out).unwrap();
    let dataset = correlate(&issues, &commits);
    store::write_dataset(&out, &dataset).unwrap();

    let dataset = store::read_dataset(&out).unwrap();
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset[0].issue_key, "PROJ-1");
    assert_eq!(dataset[0].commit_message, "fix for PROJ-1 bug");
    assert_eq!(dataset[1].issue_key, "PROJ-2");
    assert_eq!(dataset[1].commit_message, "PROJ-2 done, PROJ-20 pending");

    // Rerunning the join on unchanged tables yields an identical table.
    let again = correlate(&issues, &commits);
    assert_eq!(dataset, again);
}
