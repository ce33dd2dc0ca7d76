//! Object ids and commit records
//!
//! Both file contents and commits are identified by SHA-1 digests rendered as
//! lowercase hex. A file digest covers the raw bytes of the file; a commit id
//! covers its message and creation time only.

pub mod commit;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated form shown by `commit` and `log --oneline`
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
