use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use log::info;
use serde::Serialize;

use crate::error::DatagenError;

/// Writes `headers` followed by one line per row to `destination`.
///
/// Missing parent directories are created and an existing file is replaced.
/// Returns the number of data rows written.
///
/// # Errors
/// Errors when a directory or the file cannot be created, or a row fails to
/// serialize or be written.
pub fn write_dataset<T, H>(
    rows: &[T],
    headers: &[H],
    destination: &Path,
) -> Result<usize, DatagenError>
where
    T: Serialize,
    H: AsRef<[u8]>,
{
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(destination)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {}", rows.len(), destination.display());
    Ok(rows.len())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::identifier::Identifier;
    use crate::record::{DerivedRecord, Label};

    fn sample_rows() -> Vec<DerivedRecord> {
        vec![
            DerivedRecord::new(1.5, Identifier::new(1).unwrap(), Label::Legitimate),
            DerivedRecord::new(9.5, Identifier::new(2).unwrap(), Label::Fraudulent),
        ]
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.csv");
        let written = write_dataset(&sample_rows(), &DerivedRecord::headers(), &path).unwrap();
        assert_eq!(written, 2);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["ar,id,fr", "1.5,00000001,0", "9.5,00000002,1"]);
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();

        let rows: Vec<DerivedRecord> = vec![];
        let written = write_dataset(&rows, &DerivedRecord::headers(), &path).unwrap();
        assert_eq!(written, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "ar,id,fr\n");
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let res = write_dataset(
            &sample_rows(),
            &DerivedRecord::headers(),
            &blocker.join("out.csv"),
        );
        assert!(matches!(res, Err(DatagenError::IoError(_))));
    }
}
