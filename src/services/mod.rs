//! Services - table loading
//!
//! Non-UI operations live here, separate from model and components.

pub mod loader;

pub use loader::{load_table, read_table};
