use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::path::Path;

impl Repository {
    /// Stage every given file, expanding directories
    ///
    /// A path that cannot be staged is reported and skipped; the others are
    /// still staged and the command fails once all of them were tried.
    pub fn add(&self, paths: &[String]) -> anyhow::Result<()> {
        let files = paths
            .iter()
            .flat_map(|path| self.workspace().list_files(Path::new(path)))
            .collect::<Vec<_>>();

        let mut skipped = 0;
        for file in &files {
            match self.staging().stage(file) {
                Ok(_) => writeln!(
                    self.writer(),
                    "Staged file: {}",
                    self.workspace().display_path(file)
                )?,
                Err(
                    e @ (RepositoryError::FileNotFound(_)
                    | RepositoryError::UnsupportedFileName(_)),
                ) => {
                    eprintln!("{e}");
                    skipped += 1;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to stage {}", file.display()));
                }
            }
        }

        if skipped > 0 {
            anyhow::bail!("{skipped} of {} path(s) could not be staged", files.len());
        }

        Ok(())
    }
}
