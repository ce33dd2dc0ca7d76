use crate::CommitDisplayFormat;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub format: CommitDisplayFormat,
}

impl Repository {
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let history = self.history();

        if history.is_empty() {
            writeln!(self.writer(), "No commits found!")?;
            return Ok(());
        }

        for commit in history {
            self.display_commit(commit, opts)?;
        }

        Ok(())
    }

    pub fn display_commit(&self, commit: &Commit, opts: &LogOptions) -> anyhow::Result<()> {
        match opts.format {
            CommitDisplayFormat::Medium => self.show_commit_medium(commit),
            CommitDisplayFormat::OneLine => self.show_commit_oneline(commit),
        }
    }

    fn show_commit_medium(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "commit {}", commit.id().to_string().as_str().yellow())?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "Files:  {}", commit.file_names().join(", "))?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn show_commit_oneline(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit.id().to_short_oid().as_str().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
