//! Dynamic style and class resolution for table regions.

use webdom::Css;

use crate::table::config::SortOrder;
use crate::table::row::TableRow;
use crate::table::state::Table;

/// Table region a style fragment is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The whole table element
    Table,
    /// The row holding the page switcher
    PageSwitch,
    /// The header row
    HeadRow,
    /// One header cell, by column index
    Column(usize),
}

impl<R: TableRow> Table<R> {
    /// Compute the inline style fragment for a region.
    ///
    /// Returns `None` when nothing needs constraining, so consumers keep
    /// their layout defaults.
    ///
    /// Column widths come with a twist: with every visible column sized,
    /// the last visible one is left unconstrained to absorb remaining
    /// space. As soon as any visible column lacks a width, all declared
    /// widths are honored literally. A single visible column is never
    /// constrained.
    pub fn style(&self, region: Region) -> Option<Css> {
        let guard = self.inner.read().ok()?;
        let cfg = &guard.cfg;
        let mut fragments: Vec<Option<Css>> = Vec::new();

        match region {
            Region::Table | Region::PageSwitch => {
                if !cfg.width_full
                    && let Some(width) = cfg.width
                    && width > 0.0
                {
                    fragments.push(Some(Css::width_px(width)));
                }
            }
            Region::HeadRow => {
                if let Some(head) = &cfg.head
                    && let Some(height) = head.height
                {
                    fragments.push(Some(Css::height_px(height)));
                }
            }
            Region::Column(col) => {
                if let Some(head) = &cfg.head
                    && let Some(width) = head.columns.get(col).and_then(|c| c.width)
                {
                    let mut shown_count = 0usize;
                    let mut last_shown = 0usize;
                    let mut any_no_width = false;
                    for (n, candidate) in head.columns.iter().enumerate() {
                        if !guard.show_map.is_shown(guard.media.breakpoint, n) {
                            continue;
                        }
                        shown_count += 1;
                        last_shown = n;
                        if candidate.width.is_none() {
                            any_no_width = true;
                        }
                    }
                    if shown_count > 1 && (any_no_width || col != last_shown) {
                        fragments.push(Some(Css::width_px(width)));
                    }
                }
            }
        }

        Css::merge(fragments)
    }

    /// Compute the class list for a header cell.
    ///
    /// Configured classes come first, then the wrapping class and the
    /// sort indicator classes. Returns `None` for an unknown column or
    /// when the list ends up empty.
    pub fn column_classes(&self, col: usize) -> Option<Vec<String>> {
        let guard = self.inner.read().ok()?;
        let column = guard.cfg.head.as_ref()?.columns.get(col)?;

        let mut classes: Vec<String> = column.classes.clone();
        match column.nowrap {
            Some(true) => classes.push("content-head-nowrap".to_string()),
            Some(false) => {}
            None => classes.push("content-head-wrap".to_string()),
        }
        match column.sort {
            SortOrder::Asc => {
                classes.push("head-asc".to_string());
                classes.push("head-sorting-space".to_string());
            }
            SortOrder::Desc => {
                classes.push("head-desc".to_string());
                classes.push("head-sorting-space".to_string());
            }
            SortOrder::None => {}
        }

        if classes.is_empty() {
            None
        } else {
            Some(classes)
        }
    }
}
