//! Committing the staged index with a generated message.
//!
//! Only what is already staged is committed; the working tree is left alone.

use std::path::Path;

use git2::{Commit, ErrorCode, Oid, Repository};
use tracing::debug;

use crate::error::CommitError;

/// Open the repository at `path`.
pub fn open_repository(path: &Path) -> Result<Repository, CommitError> {
    Repository::open(path).map_err(CommitError::OpenRepository)
}

/// Create a commit on HEAD from the current index.
///
/// Fails with [`CommitError::NothingStaged`] when the index matches HEAD (or
/// is empty on an unborn branch).
pub fn commit_staged(repo: &Repository, message: &str) -> Result<Oid, CommitError> {
    let mut index = repo.index().map_err(CommitError::IndexFailed)?;
    let tree_id = index.write_tree().map_err(CommitError::IndexFailed)?;

    let parent = head_commit(repo)?;

    let nothing_staged = match &parent {
        Some(p) => p.tree_id() == tree_id,
        None => index.is_empty(),
    };
    if nothing_staged {
        return Err(CommitError::NothingStaged);
    }

    let tree = repo.find_tree(tree_id).map_err(CommitError::CommitFailed)?;

    // Get the signature from git config
    let sig = repo.signature().map_err(CommitError::ConfigError)?;

    let parents: Vec<&Commit> = parent.iter().collect();
    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .map_err(CommitError::CommitFailed)?;

    debug!("Created commit {}", oid);
    Ok(oid)
}

/// The commit HEAD points at, or `None` on an unborn branch.
fn head_commit(repo: &Repository) -> Result<Option<Commit<'_>>, CommitError> {
    match repo.head() {
        Ok(head) => head
            .peel_to_commit()
            .map(Some)
            .map_err(CommitError::CommitFailed),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
        Err(e) => Err(CommitError::CommitFailed(e)),
    }
}
