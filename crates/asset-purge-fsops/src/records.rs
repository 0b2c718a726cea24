//! Reads identifiers from a comma-separated snapshot.

use std::fs;
use std::path::Path;

use asset_purge_core::AssetRecord;

use crate::error::{FsOpsError, FsOpsResult};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read the first column of every non-empty line in `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Invalid UTF-8 is replaced
/// rather than rejected, so only the affected lines fail validation later.
pub fn read_records(path: &Path) -> FsOpsResult<Vec<AssetRecord>> {
    let bytes = fs::read(path).map_err(|err| FsOpsError::io("records.read", path, err))?;
    Ok(parse_records(&String::from_utf8_lossy(&bytes)))
}

/// Extract the first column of every non-empty line, trimmed.
#[must_use]
pub fn parse_records(contents: &str) -> Vec<AssetRecord> {
    contents
        .trim_start_matches(BYTE_ORDER_MARK)
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| AssetRecord::new(first_field(line).trim()))
        .collect()
}

fn first_field(line: &str) -> String {
    let Some(quoted) = line.strip_prefix('"') else {
        return line.split(',').next().unwrap_or_default().to_string();
    };

    let mut field = String::new();
    let mut chars = quoted.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '"' {
            if chars.peek() == Some(&'"') {
                field.push('"');
                chars.next();
            } else {
                break;
            }
        } else {
            field.push(ch);
        }
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use asset_purge_test_support::fixtures::write_lines;

    fn names(records: &[AssetRecord]) -> Vec<&str> {
        records.iter().map(AssetRecord::as_str).collect()
    }

    #[test]
    fn reads_first_column_and_trims() {
        let records = parse_records("web-01,10.0.0.1\n  web-02 ,x,y\nweb-03\r\n");
        assert_eq!(names(&records), vec!["web-01", "web-02", "web-03"]);
    }

    #[test]
    fn skips_blank_lines_but_keeps_empty_first_columns() {
        let records = parse_records("alpha\n\n,orphan\nbeta\n");
        assert_eq!(names(&records), vec!["alpha", "", "beta"]);
    }

    #[test]
    fn unquotes_quoted_first_field() {
        let records = parse_records("\"web,01\",x\n\"say \"\"hi\"\"\"\n");
        assert_eq!(names(&records), vec!["web,01", "say \"hi\""]);
    }

    #[test]
    fn strips_byte_order_mark() {
        let records = parse_records("\u{feff}alpha\nbeta");
        assert_eq!(names(&records), vec!["alpha", "beta"]);
    }

    #[test]
    fn reads_every_line_from_disk() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = write_lines(dir.path(), "backup_1.csv", &["a", "b", "c", "d"])?;
        assert_eq!(read_records(&path)?.len(), 4);
        Ok(())
    }

    #[test]
    fn invalid_utf8_only_affects_its_own_line() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("backup_1.csv");
        std::fs::write(&path, b"web-01\nbad\xffname\nweb-02\n")?;

        let records = read_records(&path)?;
        assert_eq!(names(&records), vec!["web-01", "bad\u{fffd}name", "web-02"]);
        assert!(!asset_purge_core::is_valid_identifier(records[1].as_str()));
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let err = read_records(&dir.path().join("absent.csv"))
            .err()
            .ok_or_else(|| anyhow::anyhow!("expected read failure"))?;
        assert!(matches!(
            err,
            FsOpsError::Io {
                operation: "records.read",
                ..
            }
        ));
        Ok(())
    }
}
