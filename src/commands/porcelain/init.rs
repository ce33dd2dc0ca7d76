use crate::areas::repository::{HEAD_FILE, Repository};
use anyhow::Context;
use std::fs;

const DEFAULT_BRANCH: &str = "master";

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        let meta_path = self.meta_path();

        fs::create_dir_all(&meta_path)
            .with_context(|| format!("Failed to create {}", meta_path.display()))?;

        fs::create_dir_all(self.staging().path()).with_context(|| {
            format!("Failed to create {}", self.staging().path().display())
        })?;

        // keep an existing HEAD untouched so that init stays idempotent
        let head_path = meta_path.join(HEAD_FILE);
        if !head_path.exists() {
            fs::write(&head_path, format!("{DEFAULT_BRANCH}\n"))
                .context("Failed to create initial HEAD reference")?;
        }

        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
