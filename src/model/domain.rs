//! Domain state - business/data state separate from UI concerns

use super::filter::{Document, FilterValue};
use super::row::Table;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Table information for display
#[derive(Debug, Clone)]
pub struct TableInfo {
    pub table_id: String,
    pub source_path: String,
    pub data_rows: usize,
    pub statuses: usize,
    pub loaded_at: DateTime<Local>,
}

/// Domain state containing all business data
#[derive(Default)]
pub struct DomainState {
    /// All loaded tables, addressed by id
    pub document: Document,

    /// Id of the table shown on the home screen
    pub active_table_id: Option<String>,

    /// Current filter selection
    pub filter: FilterValue,

    /// Distinct statuses of the active table, for the filter dialog
    pub statuses: Vec<String>,

    /// Cached table information
    pub table_info: Option<TableInfo>,

    /// Path the active table was loaded from
    pub source_path: Option<PathBuf>,
}

impl DomainState {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            active_table_id: None,
            filter: FilterValue::All,
            statuses: Vec::new(),
            table_info: None,
            source_path: None,
        }
    }

    /// The active table, if one is loaded
    pub fn active_table(&self) -> Option<&Table> {
        self.active_table_id
            .as_deref()
            .and_then(|id| self.document.get(id))
    }
}
