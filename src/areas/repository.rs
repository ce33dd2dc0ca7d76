use crate::areas::ledger::{History, Ledger};
use crate::areas::staging::StagingArea;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object_id::ObjectId;
use crate::config::RepositoryConfig;
use crate::errors::{RepositoryError, RepositoryResult};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Metadata directory under the repository root
pub const META_DIR: &str = ".mygit";
/// Staging directory under the repository root
pub const STAGING_DIR: &str = "staging";
/// Name of the HEAD pointer file inside the metadata directory
pub const HEAD_FILE: &str = "HEAD";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    config: RepositoryConfig,
    staging: StagingArea,
    ledger: Ledger,
    workspace: Workspace,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// The root directory must exist. The layout under it is created by
    /// `init`; staging and committing fail with `NotARepository` until then.
    pub fn new(
        path: &Path,
        config: RepositoryConfig,
        writer: Box<dyn std::io::Write>,
    ) -> RepositoryResult<Self> {
        if !path.is_dir() {
            return Err(RepositoryError::NotARepository(path.to_path_buf()));
        }
        let path = path.canonicalize()?;

        let staging = StagingArea::new(
            path.clone().into_boxed_path(),
            path.join(STAGING_DIR).into_boxed_path(),
            path.join(META_DIR).into_boxed_path(),
        );
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            config,
            staging,
            ledger: Ledger::new(),
            workspace,
        })
    }

    /// Stage one file and return its content digest
    pub fn stage(&self, file_path: impl AsRef<Path>) -> RepositoryResult<ObjectId> {
        let entry = self.staging.stage(file_path.as_ref())?;
        Ok(entry.oid().clone())
    }

    /// Commit everything staged and return the new commit id
    pub fn commit(&mut self, message: &str) -> RepositoryResult<ObjectId> {
        let timestamp = self.config.timestamp();
        self.ledger.commit(&self.staging, message, timestamp)
    }

    /// Commits made through this repository, oldest first
    pub fn history(&self) -> History<'_> {
        self.ledger.history()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn meta_path(&self) -> Box<Path> {
        self.path.join(META_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
