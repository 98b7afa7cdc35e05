//! Data model for status-keyed tables
//!
//! A `Table` is an ordered sequence of rows. The first row is usually the
//! header; data rows carry a visibility flag that the filter pass toggles.

/// Index of the cell holding the status value used as the filter match key.
pub const STATUS_COLUMN: usize = 1;

/// A single cell of a row, holding its text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One row of a table.
///
/// Header rows are excluded from filtering and carry no visibility state;
/// data rows are shown or hidden based on their status cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Column header row, never filtered
    Header { cells: Vec<Cell> },
    /// Data row with a visibility flag owned by the filter pass
    Data { cells: Vec<Cell>, visible: bool },
}

impl Row {
    /// Create a header row from cell texts
    pub fn header<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row::Header {
            cells: cells.into_iter().map(Cell::new).collect(),
        }
    }

    /// Create a data row from cell texts, initially visible
    pub fn data<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row::Data {
            cells: cells.into_iter().map(Cell::new).collect(),
            visible: true,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Row::Header { .. })
    }

    /// Cells of this row, regardless of variant
    pub fn cells(&self) -> &[Cell] {
        match self {
            Row::Header { cells } | Row::Data { cells, .. } => cells,
        }
    }

    /// The status value of a data row (text of the status column cell).
    ///
    /// Returns `None` for header rows and for data rows shorter than the
    /// status column.
    pub fn status(&self) -> Option<&str> {
        match self {
            Row::Header { .. } => None,
            Row::Data { cells, .. } => cells.get(STATUS_COLUMN).map(|c| c.text.as_str()),
        }
    }

    /// Whether this row is currently visible.
    ///
    /// Header rows are always visible.
    pub fn is_visible(&self) -> bool {
        match self {
            Row::Header { .. } => true,
            Row::Data { visible, .. } => *visible,
        }
    }

    /// Set the visibility of a data row. No-op on header rows.
    pub fn set_visible(&mut self, show: bool) {
        if let Row::Data { visible, .. } = self {
            *visible = show;
        }
    }
}

/// An ordered sequence of rows with a unique identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub id: String,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(id: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            id: id.into(),
            rows,
        }
    }

    /// Number of data rows (header rows excluded)
    pub fn data_row_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_header()).count()
    }

    /// Number of currently visible data rows
    pub fn visible_row_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| !r.is_header() && r.is_visible())
            .count()
    }

    /// Sorted distinct status values across all data rows
    pub fn distinct_statuses(&self) -> Vec<String> {
        let mut statuses: Vec<String> = self
            .rows
            .iter()
            .filter_map(|r| r.status())
            .map(|s| s.to_string())
            .collect();
        statuses.sort();
        statuses.dedup();
        statuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_row_status_reads_second_cell() {
        let row = Row::data(["#42", "open", "widget broken"]);
        assert_eq!(row.status(), Some("open"));
    }

    #[test]
    fn test_header_row_has_no_status() {
        let row = Row::header(["id", "status", "summary"]);
        assert_eq!(row.status(), None);
        assert!(row.is_header());
    }

    #[test]
    fn test_short_data_row_has_no_status() {
        let row = Row::data(["#42"]);
        assert_eq!(row.status(), None);
    }

    #[test]
    fn test_set_visible_is_noop_on_header() {
        let mut row = Row::header(["id", "status"]);
        row.set_visible(false);
        assert!(row.is_visible());
    }

    #[test]
    fn test_set_visible_toggles_data_row() {
        let mut row = Row::data(["#1", "open"]);
        assert!(row.is_visible());
        row.set_visible(false);
        assert!(!row.is_visible());
        row.set_visible(true);
        assert!(row.is_visible());
    }

    #[test]
    fn test_distinct_statuses_sorted_and_deduped() {
        let table = Table::new(
            "issues",
            vec![
                Row::header(["id", "status"]),
                Row::data(["#1", "open"]),
                Row::data(["#2", "closed"]),
                Row::data(["#3", "open"]),
            ],
        );
        assert_eq!(table.distinct_statuses(), vec!["closed", "open"]);
        assert_eq!(table.data_row_count(), 3);
    }
}
