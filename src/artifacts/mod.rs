//! Value types shared by the repository areas
//!
//! - `objects`: object ids (SHA-1 digests) and commit records
//! - `staging`: staged entries and the hashing writer used to produce them

pub mod objects;
pub mod staging;
