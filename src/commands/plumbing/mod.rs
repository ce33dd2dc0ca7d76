//! Plumbing commands
//!
//! - `hash-object`: compute the content digest of a file and optionally stage it

pub mod hash_object;
