//! Command implementations
//!
//! - `plumbing`: low-level commands (hash-object)
//! - `porcelain`: user-facing commands (init, add, commit, status, log, session)
//!
//! Commands print their results through the repository writer and report
//! failures as `anyhow` errors.

pub mod plumbing;
pub mod porcelain;
