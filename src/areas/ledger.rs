//! Commit ledger
//!
//! The ledger turns the current staging set into a commit and keeps every
//! commit made through it, in creation order, for as long as it lives.
//!
//! ## Commit sequence
//!
//! Under the staging lock:
//! 1. list the staged entries (`NothingStaged` if there are none)
//! 2. build the commit from the message, the timestamp and that list
//! 3. delete exactly the listed artifacts
//! 4. append the commit to the history
//!
//! The history is only touched once the staging directory has been cleared, so
//! a failed attempt never leaves a commit behind.

use crate::areas::staging::StagingArea;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::staging::staged_entry::StagedEntry;
use crate::errors::{RepositoryError, RepositoryResult};
use chrono::{DateTime, FixedOffset};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Ledger {
    commits: Vec<Commit>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Fold every staged entry into a new commit and clear the staging directory
    pub fn commit(
        &mut self,
        staging: &StagingArea,
        message: &str,
        timestamp: DateTime<FixedOffset>,
    ) -> RepositoryResult<ObjectId> {
        self.commit_with(staging, message, timestamp, StagingArea::remove)
    }

    /// `commit`, with `clear` deleting the recorded artifacts
    fn commit_with(
        &mut self,
        staging: &StagingArea,
        message: &str,
        timestamp: DateTime<FixedOffset>,
        clear: impl FnOnce(&StagingArea, &[StagedEntry]) -> RepositoryResult<()>,
    ) -> RepositoryResult<ObjectId> {
        let commit = staging.with_lock(|| {
            let entries = staging.entries()?;
            if entries.is_empty() {
                return Err(RepositoryError::NothingStaged);
            }

            let commit = Commit::new(message.to_string(), entries, timestamp);
            clear(staging, commit.files())?;

            Ok(commit)
        })?;

        let commit_id = commit.id().clone();
        debug!(
            commit = %commit_id,
            files = commit.files().len(),
            "recorded commit"
        );
        self.commits.push(commit);

        Ok(commit_id)
    }

    /// All commits from the first to the latest
    ///
    /// Every call starts over from the first commit.
    pub fn history(&self) -> History<'_> {
        History {
            inner: self.commits.iter(),
        }
    }

    /// The latest commit
    pub fn head(&self) -> Option<&Commit> {
        self.commits.last()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Read-only view over the ledger, oldest commit first
#[derive(Debug, Clone)]
pub struct History<'l> {
    inner: std::slice::Iter<'l, Commit>,
}

impl History<'_> {
    /// `true` when no commit has been made yet
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }
}

impl<'l> Iterator for History<'l> {
    type Item = &'l Commit;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for History<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for History<'_> {}
