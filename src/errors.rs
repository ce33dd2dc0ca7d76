use std::path::PathBuf;

/// Errors from staging and committing.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The path does not resolve to a readable regular file.
    #[error("{} not found!", .0.display())]
    FileNotFound(PathBuf),

    /// The path has a component that is not valid UTF-8, so it has no artifact name.
    #[error("{} is not a valid UTF-8 path and cannot be staged", .0.display())]
    UnsupportedFileName(PathBuf),

    /// A commit was requested while the staging directory held no artifact.
    #[error("No files staged to commit!")]
    NothingStaged,

    /// The repository layout is missing.
    #[error("not a repository (missing {}), run `mygit init` first", .0.display())]
    NotARepository(PathBuf),

    /// Some staged artifacts could not be removed while committing.
    /// The commit was not recorded.
    #[error("unable to clear staged artifacts: {}", .survivors.join(", "))]
    StagingNotCleared {
        survivors: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
