//! CSV output.
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;
use crate::review::ReviewRecord;

/// Output columns: rating, comment, label.
pub const HEADER: [&str; 3] = ["Note", "Comment", "Class"];

/// Writes a whole collection to a CSV file at once.
///
/// Records are written to a `.part` sibling file that replaces the destination
/// once everything is written, so that the destination never holds a partial result.
pub struct CsvWriter {
    dst: PathBuf,
}

impl CsvWriter {
    pub fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
        }
    }

    /// Path of the temporary file.
    fn part_path(&self) -> PathBuf {
        let mut part = OsString::from(self.dst.as_os_str());
        part.push(".part");
        PathBuf::from(part)
    }

    /// Write the header then `records`, in order.
    ///
    /// A header-only file is written when `records` is empty.
    pub fn write(&self, records: &[ReviewRecord]) -> Result<(), Error> {
        let part = self.part_path();
        debug!("writing {} records to {:?}", records.len(), part);

        if let Err(e) = Self::write_to(&part, records) {
            // nothing useful can be done if removal fails too
            let _ = fs::remove_file(&part);
            return Err(e);
        }

        if let Err(e) = fs::rename(&part, &self.dst) {
            let _ = fs::remove_file(&part);
            return Err(e.into());
        }
        info!("reviews saved to {:?}", self.dst);
        Ok(())
    }

    fn write_to(path: &Path, records: &[ReviewRecord]) -> Result<(), Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;

        writer.write_record(HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CsvWriter;
    use crate::review::ReviewRecord;

    #[test]
    fn write_quotes_delimiters() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("pos.csv");

        let records = vec![
            ReviewRecord::new(4.5, "Un film magnifique, vraiment.".to_string()),
            ReviewRecord::new(5.0, "Parfait".to_string()),
        ];
        CsvWriter::new(&dst).write(&records).unwrap();

        let content = std::fs::read_to_string(&dst).unwrap();
        assert_eq!(
            content,
            "Note,Comment,Class\n4.5,\"Un film magnifique, vraiment.\",pos\n5.0,Parfait,pos\n"
        );
    }

    #[test]
    fn write_empty() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("neg.csv");

        CsvWriter::new(&dst).write(&[]).unwrap();

        let content = std::fs::read_to_string(&dst).unwrap();
        assert_eq!(content, "Note,Comment,Class\n");
    }

    #[test]
    fn no_part_file_left() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("mid.csv");

        let writer = CsvWriter::new(&dst);
        writer
            .write(&[ReviewRecord::new(3.0, "Moyen".to_string())])
            .unwrap();

        assert!(dst.exists());
        assert!(!writer.part_path().exists());
    }

    #[test]
    fn rename_failure_removes_part_file() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out.csv");
        std::fs::create_dir(&dst).unwrap();

        let writer = CsvWriter::new(&dst);
        assert!(writer
            .write(&[ReviewRecord::new(1.0, "Nul".to_string())])
            .is_err());
        assert!(dst.is_dir());
        assert!(!writer.part_path().exists());
    }

    #[test]
    fn write_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("missing").join("out.csv");

        assert!(CsvWriter::new(&dst).write(&[]).is_err());
        assert!(!dst.exists());
    }
}
