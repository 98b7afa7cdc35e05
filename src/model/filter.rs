//! Row filtering - show/hide data rows by status equality
//!
//! A single synchronous pass: header rows are skipped, every data row's
//! visibility becomes a pure function of its status cell and the current
//! filter value. Never mutates cell text, row order, or row count.

use super::row::{Table, STATUS_COLUMN};
use anyhow::{anyhow, bail, Result};
use std::collections::HashMap;
use std::fmt;

/// Sentinel filter string that matches every row
pub const FILTER_ALL: &str = "all";

/// The current filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    /// Show every row
    #[default]
    All,
    /// Show only rows whose status equals this value
    Status(String),
}

impl FilterValue {
    /// Parse a filter string, mapping the `all` sentinel to `FilterValue::All`
    pub fn parse(value: &str) -> Self {
        if value == FILTER_ALL {
            FilterValue::All
        } else {
            FilterValue::Status(value.to_string())
        }
    }

    /// Whether a row with the given status should be shown
    pub fn matches(&self, status: &str) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Status(wanted) => wanted == status,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::All => write!(f, "{}", FILTER_ALL),
            FilterValue::Status(s) => write!(f, "{}", s),
        }
    }
}

/// Apply a filter to a table in one pass over its rows.
///
/// Header rows are left untouched. A data row without a status cell violates
/// the table contract (every data row has at least `STATUS_COLUMN + 1` cells)
/// and aborts the pass; rows already processed keep their new visibility.
pub fn apply_filter(table: &mut Table, filter: &FilterValue) -> Result<()> {
    for (idx, row) in table.rows.iter_mut().enumerate() {
        if row.is_header() {
            continue;
        }
        let status = row.status().ok_or_else(|| {
            anyhow!(
                "row {} of table '{}' has no status cell (column {})",
                idx,
                table.id,
                STATUS_COLUMN
            )
        })?;
        let show = filter.matches(status);
        row.set_visible(show);
    }
    Ok(())
}

/// A set of tables addressed by unique id.
#[derive(Debug, Default)]
pub struct Document {
    tables: HashMap<String, Table>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Insert a table, replacing any table with the same id
    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.id.clone(), table);
    }

    pub fn get(&self, table_id: &str) -> Option<&Table> {
        self.tables.get(table_id)
    }

    /// Apply a filter to the table with the given id.
    ///
    /// An unknown id is an error; nothing is mutated in that case.
    pub fn apply_filter(&mut self, table_id: &str, filter: &FilterValue) -> Result<()> {
        let table = match self.tables.get_mut(table_id) {
            Some(t) => t,
            None => bail!("table '{}' not found", table_id),
        };
        apply_filter(table, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::row::Row;

    fn issues_table() -> Table {
        Table::new(
            "issues",
            vec![
                Row::header(["id", "status", "summary"]),
                Row::data(["#1", "open", "first"]),
                Row::data(["#2", "closed", "second"]),
                Row::data(["#3", "open", "third"]),
            ],
        )
    }

    fn visibility(table: &Table) -> Vec<bool> {
        table
            .rows
            .iter()
            .filter(|r| !r.is_header())
            .map(|r| r.is_visible())
            .collect()
    }

    #[test]
    fn test_filter_all_shows_every_row() {
        let mut table = issues_table();
        apply_filter(&mut table, &FilterValue::All).unwrap();
        assert_eq!(visibility(&table), vec![true, true, true]);
    }

    #[test]
    fn test_filter_open_hides_closed_rows() {
        let mut table = issues_table();
        apply_filter(&mut table, &FilterValue::parse("open")).unwrap();
        assert_eq!(visibility(&table), vec![true, false, true]);
    }

    #[test]
    fn test_filter_closed_shows_only_closed_rows() {
        let mut table = issues_table();
        apply_filter(&mut table, &FilterValue::parse("closed")).unwrap();
        assert_eq!(visibility(&table), vec![false, true, false]);
    }

    #[test]
    fn test_filter_with_unknown_status_hides_all_data_rows() {
        let mut table = issues_table();
        apply_filter(&mut table, &FilterValue::parse("wontfix")).unwrap();
        assert_eq!(visibility(&table), vec![false, false, false]);
    }

    #[test]
    fn test_header_row_is_never_touched() {
        let mut table = issues_table();
        apply_filter(&mut table, &FilterValue::parse("closed")).unwrap();
        assert!(table.rows[0].is_visible());
        apply_filter(&mut table, &FilterValue::parse("open")).unwrap();
        assert!(table.rows[0].is_visible());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut once = issues_table();
        let filter = FilterValue::parse("open");
        apply_filter(&mut once, &filter).unwrap();

        let mut twice = issues_table();
        apply_filter(&mut twice, &filter).unwrap();
        apply_filter(&mut twice, &filter).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_refilter_overwrites_previous_assignment() {
        let mut table = issues_table();
        apply_filter(&mut table, &FilterValue::parse("closed")).unwrap();
        apply_filter(&mut table, &FilterValue::All).unwrap();
        assert_eq!(visibility(&table), vec![true, true, true]);
    }

    #[test]
    fn test_row_visibility_depends_only_on_own_status() {
        // Same status in a different neighborhood gets the same assignment
        let mut reordered = Table::new(
            "issues",
            vec![
                Row::header(["id", "status", "summary"]),
                Row::data(["#2", "closed", "second"]),
                Row::data(["#3", "open", "third"]),
                Row::data(["#1", "open", "first"]),
            ],
        );
        apply_filter(&mut reordered, &FilterValue::parse("open")).unwrap();
        assert_eq!(visibility(&reordered), vec![false, true, true]);
    }

    #[test]
    fn test_filter_does_not_mutate_cells_or_row_count() {
        let mut table = issues_table();
        let before: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|r| r.cells().iter().map(|c| c.text.clone()).collect())
            .collect();

        apply_filter(&mut table, &FilterValue::parse("open")).unwrap();

        let after: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|r| r.cells().iter().map(|c| c.text.clone()).collect())
            .collect();
        assert_eq!(before, after);
        assert_eq!(table.rows.len(), 4);
    }

    #[test]
    fn test_data_row_without_status_cell_is_an_error() {
        let mut table = Table::new(
            "broken",
            vec![Row::header(["id", "status"]), Row::data(["#1"])],
        );
        let result = apply_filter(&mut table, &FilterValue::All);
        assert!(result.is_err());
    }

    #[test]
    fn test_document_filter_by_table_id() {
        let mut doc = Document::new();
        doc.insert(issues_table());

        doc.apply_filter("issues", &FilterValue::parse("closed"))
            .unwrap();
        let table = doc.get("issues").unwrap();
        assert_eq!(table.visible_row_count(), 1);
    }

    #[test]
    fn test_document_unknown_table_id_is_an_error() {
        let mut doc = Document::new();
        doc.insert(issues_table());

        let result = doc.apply_filter("missing", &FilterValue::All);
        assert!(result.is_err());
        // The known table is untouched
        assert_eq!(doc.get("issues").unwrap().visible_row_count(), 3);
    }

    #[test]
    fn test_parse_all_sentinel() {
        assert_eq!(FilterValue::parse("all"), FilterValue::All);
        assert_eq!(
            FilterValue::parse("open"),
            FilterValue::Status("open".to_string())
        );
        assert!(FilterValue::parse("all").is_all());
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(FilterValue::All.to_string(), "all");
        assert_eq!(FilterValue::parse("open").to_string(), "open");
    }
}
