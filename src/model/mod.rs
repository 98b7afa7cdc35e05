//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Row`/`Table` - The table data model
//! - `FilterValue`/`Document` - Filtering over tables
//! - `DomainState` - Business/data state
//! - `ModalStack` - Modal overlay management

pub mod domain;
pub mod filter;
pub mod modal;
pub mod row;

// Re-export commonly used types
pub use domain::{DomainState, TableInfo};
pub use filter::{apply_filter, Document, FilterValue, FILTER_ALL};
pub use row::{Cell, Row, Table, STATUS_COLUMN};
