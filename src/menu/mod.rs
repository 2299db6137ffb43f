//! Menu editing helpers: the item record, drag-and-drop reordering, and CSV
//! bulk import.
//!
//! Persisting the result is left to the menu storage backend; everything
//! here works on in-memory values.

pub mod import;
pub mod item;
pub mod reorder;

pub use import::{parse_menu_csv, plan_import, ImportReport, RowError};
pub use item::MenuItem;
pub use reorder::{renumber, reorder};
