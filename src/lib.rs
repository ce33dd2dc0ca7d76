//! mygit: a minimal local version tracker
//!
//! Files are staged into a content-addressed staging directory and bundled
//! into immutable, timestamped commits that accumulate in an in-memory history.
//!
//! - `areas`: the repository and the areas it coordinates (staging, ledger, workspace)
//! - `artifacts`: value types (object ids, staged entries, commits)
//! - `commands`: user-facing commands that print their results
//! - `config`: settings resolved from the command line and the environment
//! - `errors`: the error type returned by repository operations

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;

/// How commits are rendered by `log`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitDisplayFormat {
    #[default]
    Medium,
    OneLine,
}
