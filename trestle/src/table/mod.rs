//! Table component - headless state for a paged, selectable data table.
//!
//! The Table component provides:
//! - Column visibility per responsive breakpoint (with per-breakpoint caps)
//! - Paging state with a configurable page switcher
//! - Row selection with a tri-state group flag
//! - A single event stream unifying clicks, context menu, selection and paging
//! - Inline style fragments and class lists for every table region
//!
//! # Example
//!
//! ```ignore
//! use trestle::prelude::*;
//!
//! #[derive(Clone)]
//! struct Order {
//!     id: u64,
//!     customer: String,
//! }
//!
//! impl TableRow for Order {
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let columns = vec![
//!     Column::new("ID").width(60.0),
//!     Column::new("Customer"),
//! ];
//! let (table, mut events) = Table::with_config(
//!     TableConfig::new()
//!         .head(Head::new(columns))
//!         .data(TableData::rows(orders))
//!         .paginator(PaginatorConfig::new(95).show(PageShow::After)),
//! );
//! ```

mod config;
mod events;
mod paginator;
mod row;
mod selection;
mod state;
mod style;
mod visibility;

pub use config::{Column, Head, RowLoader, SortOrder, TableConfig, TableData};
pub use events::{Area, EventResult, TableEvent};
pub use paginator::{
    PageShow, PageState, PaginatorConfig, ParsePageShowError, DEFAULT_PAGE_SIZE,
    DEFAULT_SIZE_LABEL, DEFAULT_TOTAL_LABEL, PAGE_SIZES,
};
pub use row::TableRow;
pub use state::Table;
pub use style::Region;
pub use visibility::{ColumnCaps, ShowMap};
