use super::{Handler, Session};
use crate::backup::export_backup;
use crate::error::Result;

/// Writes the backup CSV and reports where it went
pub struct BackupProducts;

impl Handler for BackupProducts {
    fn run(&self, session: &mut Session<'_>) -> Result<()> {
        let path = &session.config.backup;
        let count = export_backup(session.store, path)?;
        session.console.say(format!(
            "Success! {} was created with {} products.",
            path.display(),
            count
        ))?;
        Ok(())
    }
}
