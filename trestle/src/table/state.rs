//! Table state and configuration lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use webdom::{Breakpoint, Rect};

use crate::channel::{self, LatestReceiver, LatestSender, StreamReceiver, StreamSender};
use crate::media::Media;
use crate::table::config::{Column, TableConfig};
use crate::table::events::{Area, SelectionOrigin, TableEvent};
use crate::table::paginator::{PageShow, PageState, DEFAULT_SIZE_LABEL, DEFAULT_TOTAL_LABEL};
use crate::table::row::{RowSlot, TableRow};
use crate::table::selection;
use crate::table::visibility::{ColumnCaps, ShowMap};

/// Internal state for the table.
#[derive(Debug)]
pub(super) struct TableInner<R: TableRow> {
    /// Active configuration.
    pub cfg: TableConfig<R>,
    /// Body rows with live selection flags.
    pub rows: Vec<RowSlot<R>>,
    /// Per-breakpoint column visibility.
    pub show_map: ShowMap,
    /// Maximum visible columns per breakpoint.
    pub caps: ColumnCaps,
    /// Live paging state.
    pub page: PageState,
    /// Last broadcast group selection flag.
    pub group: Option<bool>,
    /// Current media state.
    pub media: Media,
    /// Set once the first configuration has been applied.
    pub is_ready: bool,
    /// Interaction event sink.
    pub event_tx: StreamSender<TableEvent>,
    /// Group selection broadcast.
    pub selection_tx: LatestSender<Option<bool>>,
    /// Configuration update feed.
    pub update_rx: Option<LatestReceiver<TableConfig<R>>>,
    /// Media update feed.
    pub media_rx: Option<LatestReceiver<Media>>,
    /// Live row stream from the configured loader.
    pub loader_rx: Option<StreamReceiver<Vec<R>>>,
}

impl<R: TableRow> TableInner<R> {
    fn new(event_tx: StreamSender<TableEvent>) -> Self {
        Self {
            cfg: TableConfig::default(),
            rows: Vec::new(),
            show_map: ShowMap::default(),
            caps: ColumnCaps::default(),
            page: PageState::default(),
            group: None,
            media: Media::default(),
            is_ready: false,
            event_tx,
            selection_tx: LatestSender::new(None),
            update_rx: None,
            media_rx: None,
            loader_rx: None,
        }
    }

    /// Apply a configuration: resolve visibility and ingest rows, then
    /// hook up the loader and recompute paging.
    ///
    /// An empty row list in the configuration keeps the previous rows;
    /// only a non-empty list replaces them. The loader subscription is
    /// replaced wholesale, so a configuration without a loader cancels
    /// a previously running one.
    pub(super) fn apply_config(&mut self, cfg: TableConfig<R>) {
        self.cfg = cfg;

        if let Some(head) = &self.cfg.head {
            self.show_map = ShowMap::resolve(&head.columns, self.caps);
        }

        let data = self.cfg.data.clone();
        if let Some(data) = data {
            if !data.rows.is_empty() {
                self.rows = data.rows.into_iter().map(RowSlot::ingest).collect();
                self.refresh_group(None);
            }
            self.loader_rx = data.loader.map(|loader| loader());
        } else {
            self.loader_rx = None;
        }

        self.page = PageState::recompute(self.cfg.paginator.as_ref(), &self.page);
        self.is_ready = true;
    }

    /// Replace the body rows from a loader batch.
    pub(super) fn apply_rows(&mut self, rows: Vec<R>) {
        self.rows = rows.into_iter().map(RowSlot::ingest).collect();
        self.refresh_group(None);
    }

    /// Recompute the group selection flag and broadcast it.
    ///
    /// With an `origin` attached, also emits a selection event carrying
    /// the selected row ids.
    pub(super) fn refresh_group(&mut self, origin: Option<SelectionOrigin>) {
        let (flag, ids) = selection::group_flag(&self.rows);
        self.group = flag;
        self.selection_tx.send(flag);
        if let Some(origin) = origin {
            self.event_tx.send(TableEvent::Selection {
                area: origin.area,
                row: origin.row,
                col: origin.col,
                rect: origin.rect,
                selected: ids,
                pointer: origin.pointer,
            });
        }
    }
}

/// Headless data table state.
///
/// `Table<R>` owns everything a table renderer needs besides markup:
/// column visibility per breakpoint, paging, row selection with a
/// tri-state group flag, dynamic style fragments and a single outgoing
/// event stream for user interactions.
///
/// The table is driven from the outside: configuration comes in through
/// [`apply_config`](Table::apply_config) or an update channel, media
/// state through a [`MediaObserver`](crate::media::MediaObserver)
/// subscription, and host glue calls [`poll`](Table::poll) to drain the
/// attached feeds.
///
/// # Examples
///
/// ```ignore
/// let (table, mut events) = Table::new();
/// table.apply_config(
///     TableConfig::new()
///         .head(Head::new(columns))
///         .data(TableData::rows(orders))
///         .paginator(PaginatorConfig::new(95)),
/// );
///
/// while let Some(event) = events.try_next() {
///     // route clicks, selection changes and paging
/// }
/// ```
#[derive(Debug)]
pub struct Table<R: TableRow> {
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner<R>>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<R: TableRow> Table<R> {
    /// Create an empty table and the receiver for its interaction events.
    pub fn new() -> (Self, StreamReceiver<TableEvent>) {
        let (event_tx, event_rx) = channel::stream();
        let table = Self {
            inner: Arc::new(RwLock::new(TableInner::new(event_tx))),
            dirty: Arc::new(AtomicBool::new(false)),
        };
        (table, event_rx)
    }

    /// Create a table with an initial configuration applied.
    pub fn with_config(cfg: TableConfig<R>) -> (Self, StreamReceiver<TableEvent>) {
        let (table, event_rx) = Self::new();
        table.apply_config(cfg);
        (table, event_rx)
    }

    /// Attach a configuration update feed.
    ///
    /// Values already in the feed count as seen; only updates published
    /// afterwards are applied, on [`poll`](Table::poll).
    pub fn with_updates(self, rx: LatestReceiver<TableConfig<R>>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.update_rx = Some(rx);
        }
        self
    }

    /// Attach a media feed and adopt its current state immediately.
    pub fn with_media(self, mut rx: LatestReceiver<Media>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.media = rx.get();
            guard.media_rx = Some(rx);
        }
        self.dirty.store(true, Ordering::SeqCst);
        self
    }

    /// Override the per-breakpoint visibility caps.
    ///
    /// Takes effect for the current columns right away and for every
    /// later configuration apply.
    pub fn with_column_caps(self, caps: ColumnCaps) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.caps = caps;
            let columns = guard
                .cfg
                .head
                .as_ref()
                .map(|head| head.columns.clone())
                .unwrap_or_default();
            if !columns.is_empty() {
                guard.show_map = ShowMap::resolve(&columns, caps);
            }
        }
        self
    }

    /// Apply a configuration now.
    pub fn apply_config(&self, cfg: TableConfig<R>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.apply_config(cfg);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Drain all attached feeds and apply what arrived.
    ///
    /// Order per call: configuration updates first, then media, then
    /// loader row batches (each batch is applied, so the last one wins).
    /// Returns the number of updates applied.
    pub fn poll(&self) -> usize {
        let mut applied = 0;

        if let Ok(mut guard) = self.inner.write() {
            let next_cfg = match guard.update_rx.as_mut() {
                Some(rx) if rx.is_changed() => Some(rx.get()),
                _ => None,
            };
            if let Some(cfg) = next_cfg {
                guard.apply_config(cfg);
                applied += 1;
            }

            let next_media = match guard.media_rx.as_mut() {
                Some(rx) if rx.is_changed() => Some(rx.get()),
                _ => None,
            };
            if let Some(media) = next_media {
                guard.media = media;
                applied += 1;
            }

            loop {
                let batch = match guard.loader_rx.as_mut() {
                    Some(rx) => rx.try_next(),
                    None => None,
                };
                let Some(rows) = batch else { break };
                guard.apply_rows(rows);
                applied += 1;
            }
        }

        if applied > 0 {
            self.dirty.store(true, Ordering::SeqCst);
        }
        applied
    }

    /// Detach all feeds: configuration updates, media and the loader.
    ///
    /// Dropping the loader receiver cancels the stream.
    pub fn detach(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.update_rx = None;
            guard.media_rx = None;
            guard.loader_rx = None;
        }
    }

    /// Whether the first configuration has been applied.
    pub fn is_ready(&self) -> bool {
        self.inner.read().map(|g| g.is_ready).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// The configured columns, in declared order.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.cfg.head.as_ref().map(|h| h.columns.clone()))
            .unwrap_or_default()
    }

    /// One configured column.
    pub fn column(&self, col: usize) -> Option<Column> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.cfg.head.as_ref().and_then(|h| h.columns.get(col).cloned()))
    }

    /// Rendered column count: configured columns plus the selection and
    /// options columns unless hidden.
    pub fn column_count(&self) -> usize {
        self.inner
            .read()
            .map(|g| {
                let mut count = g.cfg.head.as_ref().map(|h| h.columns.len()).unwrap_or(0);
                if !g.cfg.hide_first_column {
                    count += 1;
                }
                if !g.cfg.hide_last_column {
                    count += 1;
                }
                count
            })
            .unwrap_or(0)
    }

    /// Whether the header row renders at all.
    pub fn is_header(&self) -> bool {
        self.inner
            .read()
            .map(|g| {
                g.cfg
                    .head
                    .as_ref()
                    .map(|h| !h.columns.is_empty())
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    /// Whether column `col` is shown at the current breakpoint.
    pub fn column_shown(&self, col: usize) -> bool {
        self.inner
            .read()
            .map(|g| g.show_map.is_shown(g.media.breakpoint, col))
            .unwrap_or(false)
    }

    /// Indices of the columns shown at the current breakpoint.
    pub fn visible_columns(&self) -> Vec<usize> {
        self.inner
            .read()
            .map(|g| {
                g.show_map
                    .shown(g.media.breakpoint)
                    .iter()
                    .enumerate()
                    .filter(|(_, shown)| **shown)
                    .map(|(n, _)| n)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The resolved per-breakpoint visibility map.
    pub fn show_map(&self) -> ShowMap {
        self.inner
            .read()
            .map(|g| g.show_map.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// The body rows.
    pub fn rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| g.rows.iter().map(|slot| slot.row.clone()).collect())
            .unwrap_or_default()
    }

    /// One body row.
    pub fn row(&self, row: usize) -> Option<R> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(row).map(|slot| slot.row.clone()))
    }

    /// Number of loaded body rows.
    pub fn row_count(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Total row count across all pages, from the paging configuration.
    pub fn total_count(&self) -> i64 {
        self.inner.read().map(|g| g.page.count).unwrap_or(0)
    }

    /// Stable element name for a row, built from index and row id.
    pub fn row_name(&self, row: usize) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|g| {
                g.rows
                    .get(row)
                    .map(|slot| format!("row-{}-id-{}", row, slot.row.id()))
            })
    }

    /// Whether a row is excluded from selection.
    pub fn row_disabled(&self, row: usize) -> bool {
        self.inner
            .read()
            .map(|g| g.rows.get(row).map(|slot| slot.disabled()).unwrap_or(false))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// The stored selection flag of one row.
    pub fn row_selected(&self, row: usize) -> Option<bool> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(row).and_then(|slot| slot.selected))
    }

    /// Set one row's selection flag and recompute the group flag.
    ///
    /// `None` clears the stored flag without counting as selected.
    pub fn set_row_selected(&self, row: usize, value: Option<bool>) {
        if let Ok(mut guard) = self.inner.write() {
            if row >= guard.rows.len() {
                log::debug!("selection change on missing row {row}");
                return;
            }
            guard.rows[row].selected = value;
            guard.refresh_group(None);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// The tri-state group selection flag as last broadcast.
    pub fn group_selected(&self) -> Option<bool> {
        self.inner.read().ok().and_then(|g| g.group)
    }

    /// Drive the group selection.
    ///
    /// `Some(flag)` writes the flag into every selectable row, then
    /// recomputes and emits a selection event with the selected ids.
    /// `None` only broadcasts the indeterminate state; row flags stay
    /// untouched.
    pub fn set_group_selected(&self, value: Option<bool>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.group = value;
            guard.selection_tx.send(value);
            if let Some(flag) = value {
                selection::set_all(&mut guard.rows, flag);
                let origin = SelectionOrigin {
                    area: Area::Head,
                    row: None,
                    col: None,
                    rect: Rect::ZERO,
                    pointer: None,
                };
                guard.refresh_group(Some(origin));
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Subscribe to group selection flag broadcasts.
    pub fn subscribe_selection(&self) -> LatestReceiver<Option<bool>> {
        match self.inner.read() {
            Ok(g) => g.selection_tx.subscribe(),
            Err(_) => channel::latest(None).1,
        }
    }

    // -------------------------------------------------------------------------
    // Paging
    // -------------------------------------------------------------------------

    /// The live paging state.
    pub fn page_state(&self) -> PageState {
        self.inner.read().map(|g| g.page.clone()).unwrap_or_default()
    }

    /// Current page number.
    pub fn page_current(&self) -> i64 {
        self.inner.read().map(|g| g.page.current).unwrap_or(1)
    }

    /// Change the current page and emit a paginator event.
    ///
    /// When the stored page number already overflows the maximum, the
    /// requested value is replaced by the maximum.
    pub fn set_page_current(&self, value: i64) {
        if let Ok(mut guard) = self.inner.write() {
            let mut value = value;
            if guard.page.current > guard.page.max {
                value = guard.page.max;
            }
            guard.page.current = value;
            let state = guard.page.clone();
            guard.event_tx.send(TableEvent::Paginator {
                area: Area::Head,
                rect: Rect::ZERO,
                state,
                pointer: None,
            });
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Last page number.
    pub fn page_max(&self) -> i64 {
        self.inner.read().map(|g| g.page.max).unwrap_or(1)
    }

    /// Change the last page number and emit a paginator event.
    ///
    /// A current page past the new maximum is pulled back onto it.
    pub fn set_page_max(&self, value: i64) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.page.current > value {
                guard.page.current = value;
            }
            guard.page.max = value;
            let state = guard.page.clone();
            guard.event_tx.send(TableEvent::Paginator {
                area: Area::Head,
                rect: Rect::ZERO,
                state,
                pointer: None,
            });
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Rows per page.
    pub fn page_size(&self) -> i64 {
        self.inner.read().map(|g| g.page.size).unwrap_or(0)
    }

    /// Label shown before the page size switcher.
    pub fn page_size_label(&self) -> String {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.page.size_label.clone())
            .unwrap_or_else(|| DEFAULT_SIZE_LABEL.to_string())
    }

    /// Label shown before the total row count.
    pub fn page_total_label(&self) -> String {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.page.total_label.clone())
            .unwrap_or_else(|| DEFAULT_TOTAL_LABEL.to_string())
    }

    /// Whether the page switcher renders at `edge`.
    ///
    /// Only [`PageShow::Before`] and [`PageShow::After`] name positions;
    /// any other argument reads as hidden.
    pub fn page_switch_visible(&self, edge: PageShow) -> bool {
        self.inner
            .read()
            .map(|g| {
                matches!(edge, PageShow::Before | PageShow::After)
                    && (g.page.show == edge || g.page.show == PageShow::All)
            })
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Media
    // -------------------------------------------------------------------------

    /// The media state the table currently lays out for.
    pub fn media(&self) -> Media {
        self.inner.read().map(|g| g.media).unwrap_or_default()
    }

    /// The active breakpoint.
    pub fn breakpoint(&self) -> Breakpoint {
        self.inner
            .read()
            .map(|g| g.media.breakpoint)
            .unwrap_or(Breakpoint::Lo)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<R: TableRow> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
