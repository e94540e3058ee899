//! Table configuration types: columns, head, data source and top-level config.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use webdom::Breakpoint;

use crate::channel::StreamReceiver;
use crate::table::paginator::PaginatorConfig;

/// Sort direction shown in a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    None,
    Asc,
    Desc,
}

/// Column configuration.
///
/// Columns define the structure of the table: header label, width,
/// the minimum breakpoint at which the column appears, and presentation
/// hints (wrapping, sort indicator, extra class names).
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("ID").width(60.0),
///     Column::new("Name").sort(SortOrder::Asc),
///     Column::new("Comment").min_media(Breakpoint::Lg).nowrap(false),
/// ];
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Column {
    /// Header label text
    pub label: String,
    /// Column width in pixels
    pub width: Option<f32>,
    /// Smallest breakpoint at which this column is shown
    pub min_media: Option<Breakpoint>,
    /// Wrapping hint: `Some(true)` forbids wrapping and `Some(false)`
    /// allows it; `None` requests the default wrapping class
    pub nowrap: Option<bool>,
    /// Sort indicator shown in the header
    pub sort: SortOrder,
    /// Extra class names attached to the header cell
    pub classes: Vec<String>,
}

impl Column {
    /// Create a new column with a header label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the column width in pixels.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Require at least `breakpoint` for this column to be shown.
    pub fn min_media(mut self, breakpoint: Breakpoint) -> Self {
        self.min_media = Some(breakpoint);
        self
    }

    /// Set the wrapping hint.
    pub fn nowrap(mut self, nowrap: bool) -> Self {
        self.nowrap = Some(nowrap);
        self
    }

    /// Set the sort indicator.
    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = order;
        self
    }

    /// Append a class name to the header cell.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }
}

/// Table head configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Head {
    /// Ordered column list
    pub columns: Vec<Column>,
    /// Header row height in pixels
    pub height: Option<f32>,
}

impl Head {
    /// Create a head from an ordered column list.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            height: None,
        }
    }

    /// Set the header row height in pixels.
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }
}

/// Factory producing a stream of row batches.
///
/// Called once per configuration apply; each call returns a fresh
/// receiver. Replacing the configuration drops the previous receiver,
/// which cancels the previous stream.
pub type RowLoader<R> = Arc<dyn Fn() -> StreamReceiver<Vec<R>> + Send + Sync>;

/// Body data source: static rows, a row loader, or both.
#[derive(Clone, Serialize, Deserialize)]
#[serde(
    default,
    bound(serialize = "R: Serialize", deserialize = "R: serde::de::DeserializeOwned")
)]
pub struct TableData<R> {
    /// Static rows applied on configuration load
    pub rows: Vec<R>,
    /// Dynamic row source
    #[serde(skip)]
    pub loader: Option<RowLoader<R>>,
}

impl<R> TableData<R> {
    /// Create a data source from static rows.
    pub fn rows(rows: Vec<R>) -> Self {
        Self { rows, loader: None }
    }

    /// Create a data source from a row loader.
    pub fn loader(loader: RowLoader<R>) -> Self {
        Self {
            rows: Vec::new(),
            loader: Some(loader),
        }
    }

    /// Attach a row loader.
    pub fn with_loader(mut self, loader: RowLoader<R>) -> Self {
        self.loader = Some(loader);
        self
    }
}

impl<R> Default for TableData<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loader: None,
        }
    }
}

impl<R> fmt::Debug for TableData<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableData")
            .field("rows", &self.rows.len())
            .field("loader", &self.loader.is_some())
            .finish()
    }
}

/// Top-level table configuration.
///
/// Every section is optional. A missing section means "nothing to do":
/// no head means zero columns and no data an empty body, while a missing
/// paginator turns paging off.
///
/// # Examples
///
/// ```ignore
/// let cfg = TableConfig::new()
///     .head(Head::new(columns))
///     .data(TableData::rows(rows))
///     .paginator(PaginatorConfig::new(95).size(10))
///     .width(800.0);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(
    default,
    rename_all = "camelCase",
    bound(serialize = "R: Serialize", deserialize = "R: serde::de::DeserializeOwned")
)]
pub struct TableConfig<R> {
    /// Head configuration; absent means the table renders without a header
    pub head: Option<Head>,
    /// Body data source
    pub data: Option<TableData<R>>,
    /// Paging configuration; absent disables paging
    pub paginator: Option<PaginatorConfig>,
    /// Explicit table width in pixels
    pub width: Option<f32>,
    /// Stretch the table to the full container width, ignoring `width`
    pub width_full: bool,
    /// Drop the leading selection column
    pub hide_first_column: bool,
    /// Drop the trailing options column
    pub hide_last_column: bool,
}

impl<R> TableConfig<R> {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the head configuration.
    pub fn head(mut self, head: Head) -> Self {
        self.head = Some(head);
        self
    }

    /// Set the body data source.
    pub fn data(mut self, data: TableData<R>) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the paging configuration.
    pub fn paginator(mut self, paginator: PaginatorConfig) -> Self {
        self.paginator = Some(paginator);
        self
    }

    /// Set an explicit table width in pixels.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Stretch the table to the full container width.
    pub fn width_full(mut self) -> Self {
        self.width_full = true;
        self
    }

    /// Drop the leading selection column.
    pub fn hide_first_column(mut self) -> Self {
        self.hide_first_column = true;
        self
    }

    /// Drop the trailing options column.
    pub fn hide_last_column(mut self) -> Self {
        self.hide_last_column = true;
        self
    }
}

impl<R> Default for TableConfig<R> {
    fn default() -> Self {
        Self {
            head: None,
            data: None,
            paginator: None,
            width: None,
            width_full: false,
            hide_first_column: false,
            hide_last_column: false,
        }
    }
}

impl<R> fmt::Debug for TableConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("head", &self.head)
            .field("data", &self.data)
            .field("paginator", &self.paginator)
            .field("width", &self.width)
            .field("width_full", &self.width_full)
            .field("hide_first_column", &self.hide_first_column)
            .field("hide_last_column", &self.hide_last_column)
            .finish()
    }
}
