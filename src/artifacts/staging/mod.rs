//! Staged entries
//!
//! A staged file lives in the staging directory as an artifact named
//! `<digest>_<path>`, where `path` is relative to the repository root with
//! `%` escaped as `%25` and `/` as `%2F`. Keying on both parts keeps files
//! with equal content but different paths apart, while restaging an unchanged
//! file rewrites the same artifact.

pub mod hashing_writer;
pub mod staged_entry;

/// Separator between the digest and the escaped path
pub const ARTIFACT_SEPARATOR: char = '_';
