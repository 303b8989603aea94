use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use super::error::{Result, TableError};
use super::model::{CellValue, Row, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table from a comma-delimited file.
///
/// The first line is the header: column names, unique, order preserved.
/// Every following line becomes one row whose fields align positionally
/// with the header. The whole file is read before returning; there is no
/// streaming.
pub fn load_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;

    // flexible: field counts are validated here instead, so the error can
    // name the offending line.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = read_header(&mut reader, path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| TableError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() != headers.len() {
            return Err(TableError::FieldCount {
                path: path.to_path_buf(),
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }

        let cells: BTreeMap<String, CellValue> = headers
            .iter()
            .zip(record.iter())
            .map(|(name, field)| (name.clone(), CellValue::parse(field)))
            .collect();
        rows.push(Row { cells });
    }

    Ok(Table::new(headers, rows))
}

fn open_error(path: &Path, source: io::Error) -> TableError {
    if source.kind() == io::ErrorKind::NotFound {
        TableError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        TableError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read the header line and check it is present and free of duplicates.
fn read_header<R: io::Read>(reader: &mut csv::Reader<R>, path: &Path) -> Result<Vec<String>> {
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| TableError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(TableError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    for (i, name) in headers.iter().enumerate() {
        if headers[..i].contains(name) {
            return Err(TableError::DuplicateColumn {
                path: path.to_path_buf(),
                column: name.clone(),
            });
        }
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_header_and_rows_in_order() {
        let dir = tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "in.csv",
            "ident,type,name\nA1,large_airport,Alpha\nB2,small_airport,Beta\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(table.columns, vec!["ident", "type", "name"]);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows[0].get("ident"),
            Some(&CellValue::String("A1".to_string()))
        );
        assert_eq!(
            table.rows[1].get("type"),
            Some(&CellValue::String("small_airport".to_string()))
        );
    }

    #[test]
    fn infers_cell_types() {
        let dir = tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "in.csv",
            "ident,elevation_ft,scheduled\nA1,5430,true\nB2,,false\n",
        );

        let table = load_table(&path).unwrap();
        assert_eq!(
            table.rows[0].get("elevation_ft"),
            Some(&CellValue::Integer(5430))
        );
        assert_eq!(table.rows[0].get("scheduled"), Some(&CellValue::Bool(true)));
        assert_eq!(table.rows[1].get("elevation_ft"), Some(&CellValue::Null));
    }

    #[test]
    fn header_only_file_gives_empty_table() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "in.csv", "ident,type,name\n");

        let table = load_table(&path).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns, vec!["ident", "type", "name"]);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempdir().unwrap();
        let err = load_table(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, TableError::FileNotFound { .. }));
    }

    #[test]
    fn ragged_row_reports_its_line_number() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "in.csv", "a,b\n1,2\n3\n");

        match load_table(&path).unwrap_err() {
            TableError::FieldCount {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "in.csv", "a,b,a\n1,2,3\n");

        match load_table(&path).unwrap_err() {
            TableError::DuplicateColumn { column, .. } => assert_eq!(column, "a"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_has_no_header() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "in.csv", "");

        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, TableError::MissingHeader { .. }));
    }

    #[test]
    fn quoted_fields_keep_embedded_delimiters() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "in.csv", "name,note\nAlpha,\"hello, world\"\n");

        let table = load_table(&path).unwrap();
        assert_eq!(
            table.rows[0].get("note"),
            Some(&CellValue::String("hello, world".to_string()))
        );
    }
}
