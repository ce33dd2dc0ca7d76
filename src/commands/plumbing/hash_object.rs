use crate::areas::repository::Repository;
use std::path::Path;

impl Repository {
    pub fn hash_object(&self, file_path: &str, write: bool) -> anyhow::Result<()> {
        let file_path = Path::new(file_path);

        let object_id = if write {
            self.stage(file_path)?
        } else {
            self.staging().hash_file(file_path)?
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
