use ahash::AHashMap;

/// One input row: column name to cell text. Blank cells are never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: AHashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self { Self::default() }

    /// Build a row from `(column, value)` pairs, skipping blank values.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (column, value) in pairs { row.insert(column, value) }
        row
    }

    /// Set a cell. Whitespace-only values count as blank and are dropped.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() { return }
        self.cells.insert(column.into(), value);
    }

    /// Get the cell text for `column`, or `None` when the cell is blank or absent.
    #[inline]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// A header plus its rows. Column order is significant for column groups.
#[derive(Debug, Clone, Default)]
pub struct RowTable {
    columns: Vec<String>,
    rows: Vec<RawRow>,
}

impl RowTable {
    pub fn new(columns: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { columns, rows }
    }

    /// Build a table from a header and rows of cell values in header order.
    pub fn from_records<R, S>(columns: &[&str], records: R) -> Self
    where
        R: IntoIterator<Item = Vec<S>>,
        S: Into<String>,
    {
        let rows = records.into_iter()
            .map(|values| RawRow::from_pairs(columns.iter().copied().zip(values)))
            .collect();
        Self::new(columns.iter().map(|c| c.to_string()).collect(), rows)
    }

    #[inline] pub fn columns(&self) -> &[String] { &self.columns }

    #[inline] pub fn rows(&self) -> &[RawRow] { &self.rows }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}
