//! Content-addressed staging directory
//!
//! `stage` copies a file into the staging directory under `<digest>_<path>`
//! while hashing it, `path` being the file's location relative to the
//! repository root. The copy first lands in a temporary file inside the
//! metadata directory and is then renamed into place, so the staging directory
//! only ever holds complete artifacts.
//!
//! ## Locking
//!
//! Writes and the commit sequence (list, then delete) run under an exclusive
//! lock on `.mygit/staging.lock`.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::staging::hashing_writer::HashingWriter;
use crate::artifacts::staging::staged_entry::StagedEntry;
use crate::errors::{RepositoryError, RepositoryResult};
use bytes::Bytes;
use fake::rand;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

const LOCK_FILE_NAME: &str = "staging.lock";

#[derive(Debug)]
pub struct StagingArea {
    /// Repository root that staged paths are named against
    root: Box<Path>,
    /// Directory holding the artifacts (typically `<root>/staging`)
    path: Box<Path>,
    /// Metadata directory for the lock and temporary files (typically `<root>/.mygit`)
    meta_path: Box<Path>,
}

impl StagingArea {
    pub fn new(root: Box<Path>, path: Box<Path>, meta_path: Box<Path>) -> Self {
        StagingArea {
            root,
            path,
            meta_path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy `file_path` into the staging directory and return its entry
    ///
    /// Fails with `FileNotFound` when the path is missing, is not a regular
    /// file or cannot be opened, and with `UnsupportedFileName` when the path
    /// is not valid UTF-8; the staging directory is left untouched.
    pub fn stage(&self, file_path: &Path) -> RepositoryResult<StagedEntry> {
        self.ensure_exists()?;
        let staged_path = self.staged_path(file_path)?;
        let mut source = Self::open_source(file_path)?;

        self.with_lock(|| {
            let temp_path = self.meta_path.join(Self::generate_temp_name());

            let oid = match Self::copy_hashed(&mut source, &temp_path) {
                Ok(oid) => oid,
                Err(e) => {
                    let _ = fs::remove_file(&temp_path);
                    return Err(e.into());
                }
            };

            let entry = StagedEntry::new(oid, staged_path);
            let artifact_path = self.artifact_path(&entry);

            // rename the temp file to the artifact to make it atomic
            if let Err(e) = fs::rename(&temp_path, &artifact_path) {
                let _ = fs::remove_file(&temp_path);
                return Err(e.into());
            }

            debug!(
                file = %file_path.display(),
                artifact = %entry.artifact_name(),
                "staged file"
            );

            Ok(entry)
        })
    }

    /// Compute the digest `stage` would produce, without writing anything
    pub fn hash_file(&self, file_path: &Path) -> RepositoryResult<ObjectId> {
        let mut source = Self::open_source(file_path)?;
        let mut writer = HashingWriter::new(io::sink());
        io::copy(&mut source, &mut writer)?;

        Ok(writer.finish().1)
    }

    /// List the staged entries ordered by artifact name
    pub fn entries(&self) -> RepositoryResult<Vec<StagedEntry>> {
        self.ensure_exists()?;

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.path)? {
            let dir_entry = dir_entry?;
            let name = dir_entry.file_name();
            let name = name.to_string_lossy();

            match StagedEntry::parse_artifact_name(&name) {
                Some(entry) if dir_entry.file_type()?.is_file() => entries.push(entry),
                _ => warn!(entry = %name, "ignoring foreign entry in staging directory"),
            }
        }
        entries.sort();

        Ok(entries)
    }

    /// Read back the content of a staged entry
    pub fn load(&self, entry: &StagedEntry) -> RepositoryResult<Bytes> {
        Ok(fs::read(self.artifact_path(entry))?.into())
    }

    /// Delete the given artifacts
    ///
    /// Every artifact is attempted even after a failure; the error then lists
    /// exactly which artifacts are still on disk. An artifact already gone
    /// counts as removed.
    pub(crate) fn remove(&self, entries: &[StagedEntry]) -> RepositoryResult<()> {
        let mut survivors = Vec::new();
        let mut first_error = None;

        for entry in entries {
            match fs::remove_file(self.artifact_path(entry)) {
                Ok(()) => debug!(artifact = %entry.artifact_name(), "removed staged artifact"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    survivors.push(entry.artifact_name());
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            None => Ok(()),
            Some(source) => Err(RepositoryError::StagingNotCleared { survivors, source }),
        }
    }

    /// Run `operation` while holding the exclusive staging lock
    pub(crate) fn with_lock<T>(
        &self,
        operation: impl FnOnce() -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        self.ensure_exists()?;

        let mut lock_file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.meta_path.join(LOCK_FILE_NAME))?;
        let _lock = file_guard::lock(&mut lock_file, file_guard::Lock::Exclusive, 0, 1)?;

        operation()
    }

    /// Name a file by its path relative to the repository root
    ///
    /// Files outside the root keep their absolute path, which starts with `/`
    /// and so never clashes with a relative one.
    fn staged_path(&self, file_path: &Path) -> RepositoryResult<String> {
        let not_found = || RepositoryError::FileNotFound(file_path.to_path_buf());

        let absolute = file_path.canonicalize().map_err(|_| not_found())?;
        let root = self.root.canonicalize()?;
        let (relative, prefix) = match absolute.strip_prefix(&root) {
            Ok(relative) => (relative, ""),
            Err(_) => (absolute.as_path(), "/"),
        };

        let components = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name),
                _ => None,
            })
            .map(|name| {
                name.to_str()
                    .ok_or_else(|| RepositoryError::UnsupportedFileName(file_path.to_path_buf()))
            })
            .collect::<RepositoryResult<Vec<_>>>()?;
        if components.is_empty() {
            return Err(not_found());
        }

        Ok(format!("{prefix}{}", components.join("/")))
    }

    fn ensure_exists(&self) -> RepositoryResult<()> {
        for dir in [&self.meta_path, &self.path] {
            if !dir.is_dir() {
                return Err(RepositoryError::NotARepository(dir.to_path_buf()));
            }
        }

        Ok(())
    }

    fn open_source(file_path: &Path) -> RepositoryResult<File> {
        let not_found = || RepositoryError::FileNotFound(file_path.to_path_buf());

        let metadata = fs::metadata(file_path).map_err(|_| not_found())?;
        if !metadata.is_file() {
            return Err(not_found());
        }

        File::open(file_path).map_err(|_| not_found())
    }

    fn copy_hashed(source: &mut File, temp_path: &Path) -> io::Result<ObjectId> {
        let temp_file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_path)?;

        let mut writer = HashingWriter::new(BufWriter::new(temp_file));
        io::copy(source, &mut writer)?;
        writer.flush()?;

        let (buffered, oid) = writer.finish();
        buffered.into_inner().map_err(|e| e.into_error())?;

        Ok(oid)
    }

    fn artifact_path(&self, entry: &StagedEntry) -> PathBuf {
        self.path.join(entry.artifact_name())
    }

    fn generate_temp_name() -> String {
        format!("tmp-stage-{}", rand::random::<u32>())
    }
}
