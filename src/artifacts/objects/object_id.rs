//! Object identifier (SHA-1 hash)
//!
//! - Full: 40 hex characters (e.g., "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d")
//! - Short: first 7 characters (e.g., "aaf4c61")

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use crate::errors::{RepositoryError, RepositoryResult};
use sha1::{Digest, Sha1};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Accepts exactly 40 lowercase hexadecimal characters.
    pub fn try_parse(id: impl Into<String>) -> RepositoryResult<Self> {
        let id = id.into();

        if id.len() != OBJECT_ID_LENGTH
            || !id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(RepositoryError::InvalidObjectId(id));
        }

        Ok(Self(id))
    }

    /// Consume a hasher and render its digest as an object id
    pub(crate) fn from_hasher(hasher: Sha1) -> Self {
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Hash a byte slice in one go
    pub fn hash_bytes(data: impl AsRef<[u8]>) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data.as_ref());
        Self::from_hasher(hasher)
    }

    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_OBJECT_ID_LENGTH].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
