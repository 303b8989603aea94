use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
#[derive(Debug, Clone)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// An empty field in the source file.
    Null,
}

impl CellValue {
    /// Infer a typed value from raw field text.
    ///
    /// Tries integer, then float, then bool; anything else stays text.
    /// No trimming: `" 1"` is text, not a number. The empty string becomes
    /// [`CellValue::Null`].
    pub fn parse(s: &str) -> CellValue {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }
}

// -- Manual Eq so float cells compare totally (NaN == NaN) --

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        use CellValue::*;
        match (self, other) {
            (String(a), String(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Float(a), Float(b)) => a.total_cmp(b) == std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a == b,
            (Null, Null) => true,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            // `{:?}` keeps a trailing `.0` on integral floats so the text
            // re-parses as a float, not an integer.
            CellValue::Float(v) => write!(f, "{v:?}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one data line of the source file
// ---------------------------------------------------------------------------

/// A single data row: column name → cell value.
///
/// Invariant, upheld by the loader: the key set matches the owning table's
/// header exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    /// Cell value for `column`, if the row carries that column.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

// ---------------------------------------------------------------------------
// Table – the complete in-memory dataset
// ---------------------------------------------------------------------------

/// An ordered sequence of rows sharing one header.
///
/// `columns` preserves the source file's column order, even for a table
/// with zero data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Table { columns, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `column` is one of the header columns.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}
