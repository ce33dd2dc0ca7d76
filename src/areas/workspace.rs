use crate::areas::repository::{META_DIR, STAGING_DIR};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Expand a user-supplied path into the files to stage
    ///
    /// Directories expand to every regular file below them, in name order,
    /// skipping the repository's own metadata and staging directories. Any
    /// other path is returned as-is so that staging can report it.
    pub fn list_files(&self, path: &Path) -> Vec<PathBuf> {
        if !path.is_dir() {
            return vec![path.to_path_buf()];
        }

        WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry.path()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Shorten a path for display, relative to the workspace when possible
    pub fn display_path<'p>(&self, path: &'p Path) -> std::borrow::Cow<'p, str> {
        match std::fs::canonicalize(path) {
            Ok(absolute) => match absolute.strip_prefix(&self.path) {
                Ok(relative) => relative.to_string_lossy().into_owned().into(),
                Err(_) => path.to_string_lossy(),
            },
            Err(_) => path.to_string_lossy(),
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let inside_repository = std::fs::canonicalize(path)
            .map(|absolute| {
                absolute.starts_with(self.path.join(META_DIR))
                    || absolute.starts_with(self.path.join(STAGING_DIR))
            })
            .unwrap_or(false);

        inside_repository || path.file_name().is_some_and(|name| name == META_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;

    fn workspace(dir: &TempDir) -> Workspace {
        Workspace::new(dir.path().canonicalize().unwrap().into_boxed_path())
    }

    #[test]
    fn directories_expand_to_files_in_name_order() {
        let dir = TempDir::new().unwrap();
        dir.child("b.txt").write_str("b").unwrap();
        dir.child("a").child("nested.txt").write_str("n").unwrap();
        dir.child(".mygit").child("HEAD").write_str("master\n").unwrap();
        dir.child("staging").child("artifact").write_str("x").unwrap();
        let workspace = workspace(&dir);

        let files = workspace
            .list_files(dir.path())
            .iter()
            .map(|path| workspace.display_path(path).into_owned())
            .collect::<Vec<_>>();

        assert_eq!(files, vec!["a/nested.txt", "b.txt"]);
    }

    #[test]
    fn plain_and_missing_paths_pass_through() {
        let dir = TempDir::new().unwrap();
        dir.child("a.txt").write_str("a").unwrap();
        let workspace = workspace(&dir);
        let missing = dir.path().join("missing.txt");

        assert_eq!(
            workspace.list_files(&dir.path().join("a.txt")),
            vec![dir.path().join("a.txt")]
        );
        assert_eq!(workspace.list_files(&missing), vec![missing.clone()]);
    }
}
