use crate::areas::repository::Repository;

impl Repository {
    /// Commit the staged files and report the new commit
    pub fn record(&mut self, message: &str) -> anyhow::Result<()> {
        let commit_id = self.commit(message)?;
        let files = self
            .ledger()
            .head()
            .map(|commit| commit.files().len())
            .unwrap_or_default();

        writeln!(
            self.writer(),
            "[{}] Committed: {}",
            commit_id.to_short_oid(),
            message.lines().next().unwrap_or_default()
        )?;
        writeln!(
            self.writer(),
            " {} file{} recorded",
            files,
            if files == 1 { "" } else { "s" }
        )?;

        Ok(())
    }
}
