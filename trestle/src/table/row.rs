//! Row contract and body row bookkeeping.

/// Trait for items that can be displayed as rows in a [`Table`](super::Table).
///
/// Implement this trait to describe your data to the table. Only the
/// identifier is mandatory; selection hints have inert defaults.
///
/// # Examples
///
/// ```ignore
/// #[derive(Clone)]
/// struct Order {
///     id: u64,
///     locked: bool,
/// }
///
/// impl TableRow for Order {
///     fn id(&self) -> u64 {
///         self.id
///     }
///
///     fn no_select(&self) -> bool {
///         self.locked
///     }
/// }
/// ```
pub trait TableRow: Send + Sync + Clone + 'static {
    /// Unique identifier for this row.
    ///
    /// Reported in selection events and used to build stable element names.
    fn id(&self) -> u64;

    /// Initial selection state carried by the row data.
    fn selected(&self) -> Option<bool> {
        None
    }

    /// Whether the row is excluded from selection.
    fn no_select(&self) -> bool {
        false
    }
}

/// A body row plus its live selection state.
///
/// The stored flag starts as the normalized row hint and is mutated by
/// selection operations afterwards; the row data itself stays untouched.
#[derive(Debug, Clone)]
pub(crate) struct RowSlot<R> {
    pub(crate) row: R,
    pub(crate) selected: Option<bool>,
}

impl<R: TableRow> RowSlot<R> {
    /// Normalize an incoming row: no explicit selection state means
    /// "not selected".
    pub(crate) fn ingest(row: R) -> Self {
        let selected = Some(row.selected().unwrap_or(false));
        Self { row, selected }
    }

    pub(crate) fn is_selected(&self) -> bool {
        self.selected == Some(true)
    }

    pub(crate) fn disabled(&self) -> bool {
        self.row.no_select()
    }
}
