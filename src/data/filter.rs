use super::error::{Result, TableError};
use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Equality filter
// ---------------------------------------------------------------------------

/// Select the rows of `table` whose value in `column` equals `value`.
///
/// * Exact value equality, no normalisation, no case folding.
/// * Relative row order is preserved.
/// * The input table is left untouched; the result is an independent copy
///   sharing no state with it.
/// * A `column` absent from the header fails with
///   [`TableError::MissingColumn`].
pub fn filter_equals(table: &Table, column: &str, value: &CellValue) -> Result<Table> {
    if !table.has_column(column) {
        return Err(TableError::MissingColumn {
            column: column.to_string(),
        });
    }

    let rows = table
        .rows
        .iter()
        .filter(|row| row.get(column) == Some(value))
        .cloned()
        .collect();

    Ok(Table::new(table.columns.clone(), rows))
}
