use std::path::Path;

use tempfile::NamedTempFile;

use super::error::{Result, TableError};
use super::model::Table;

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Write `table` to a comma-delimited file at `path`, header line first,
/// rows in table order, no index column.
///
/// An existing file at `path` is replaced without warning. Rows go to a
/// temporary file in the destination directory and are moved over `path`
/// only once the whole table has been flushed, so a failed run leaves no
/// partial output behind.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let tmp = NamedTempFile::new_in(dir).map_err(|e| io_error(path, e))?;

    {
        let mut writer = csv::Writer::from_writer(tmp.as_file());
        writer
            .write_record(&table.columns)
            .map_err(|e| csv_error(path, e))?;

        for row in &table.rows {
            let fields: Vec<String> = table
                .columns
                .iter()
                .map(|col| row.get(col).map(ToString::to_string).unwrap_or_default())
                .collect();
            writer.write_record(&fields).map_err(|e| csv_error(path, e))?;
        }

        writer.flush().map_err(|e| io_error(path, e))?;
    }

    tmp.persist(path).map_err(|e| io_error(path, e.error))?;
    Ok(())
}

fn csv_error(path: &Path, source: csv::Error) -> TableError {
    TableError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn io_error(path: &Path, source: std::io::Error) -> TableError {
    TableError::Io {
        path: path.to_path_buf(),
        source,
    }
}
