use crate::areas::repository::Repository;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let entries = self.staging().entries()?;

        if entries.is_empty() {
            writeln!(self.writer(), "Nothing staged.")?;
            return Ok(());
        }

        writeln!(self.writer(), "Staged files:")?;
        for entry in entries {
            writeln!(self.writer(), "  {entry}")?;
        }

        Ok(())
    }
}
