//! Commit record
//!
//! A commit bundles a message, a creation timestamp and the staged entries that
//! were present when it was created. The commit id is the SHA-1 of the message
//! bytes followed by a time nonce (`<unix seconds>.<nanoseconds>`):
//!
//! ```text
//! id = sha1(message ++ "1672574400.000000000")
//! ```
//!
//! The id does not cover the staged contents, so two commits with the same
//! message and the same timestamp share an id whatever files they carry.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::staging::staged_entry::StagedEntry;
use chrono::{DateTime, FixedOffset};
use sha1::{Digest, Sha1};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    id: ObjectId,
    message: String,
    files: Vec<StagedEntry>,
    timestamp: DateTime<FixedOffset>,
}

impl Commit {
    /// Build a commit, deriving its id from `message` and `timestamp`
    pub fn new(
        message: String,
        files: Vec<StagedEntry>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        let id = Self::compute_id(&message, &timestamp);

        Commit {
            id,
            message,
            files,
            timestamp,
        }
    }

    pub fn compute_id(message: &str, timestamp: &DateTime<FixedOffset>) -> ObjectId {
        let mut hasher = Sha1::new();
        hasher.update(message.as_bytes());
        hasher.update(Self::time_nonce(timestamp).as_bytes());

        ObjectId::from_hasher(hasher)
    }

    fn time_nonce(timestamp: &DateTime<FixedOffset>) -> String {
        format!(
            "{}.{:09}",
            timestamp.timestamp(),
            timestamp.timestamp_subsec_nanos()
        )
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Staged entries captured at creation, ordered by artifact name
    pub fn files(&self) -> &[StagedEntry] {
        &self.files
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.iter().map(StagedEntry::artifact_name).collect()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Timestamp in the form "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}
