//! Table interaction events and routing.
//!
//! Every user interaction funnels into one outgoing stream of
//! [`TableEvent`]s. The routing methods return an [`EventResult`] telling
//! the host what to do with the originating browser event.

use std::sync::atomic::Ordering;

use webdom::{ancestor_rect, PointerEvent, Rect, BUTTON_TAGS, CELL_TAGS};

use crate::table::paginator::PageState;
use crate::table::row::TableRow;
use crate::table::state::Table;

// ============================================================================
// Event types
// ============================================================================

/// Table area an interaction originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Header row and paging controls above the body
    Head,
    /// Data cells
    Body,
    /// The leading selection column
    SelectColumn,
    /// The trailing options column
    Options,
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Area::Head => "head",
            Area::Body => "body",
            Area::SelectColumn => "select-column",
            Area::Options => "options",
        };
        write!(f, "{}", name)
    }
}

/// What the host should do with the originating browser event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// Not handled, let the default behavior run.
    #[default]
    Ignored,
    /// Handled fully: stop propagation and prevent the default action.
    Consumed,
    /// Prevent the default action only.
    PreventDefault,
    /// Stop propagation only.
    StopPropagation,
}

impl EventResult {
    /// Check if the event was handled in any way.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }

    /// Check if the default action must be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, EventResult::Consumed | EventResult::PreventDefault)
    }

    /// Check if propagation must stop.
    pub fn stops_propagation(&self) -> bool {
        matches!(self, EventResult::Consumed | EventResult::StopPropagation)
    }
}

/// A user interaction emitted on the table's event stream.
///
/// Created fresh per interaction and consumed once by the receiver
/// handed out by [`Table::new`](super::Table::new).
#[derive(Debug, Clone)]
pub enum TableEvent {
    /// Plain click on a cell.
    Click {
        area: Area,
        row: usize,
        col: usize,
        rect: Rect,
        pointer: PointerEvent,
    },
    /// Context menu request on a cell.
    Context {
        area: Area,
        row: usize,
        col: usize,
        rect: Rect,
        pointer: PointerEvent,
    },
    /// Selection changed; `selected` lists the selected row ids in row order.
    ///
    /// Row and column are absent when the change came from the group
    /// checkbox rather than a cell.
    Selection {
        area: Area,
        row: Option<usize>,
        col: Option<usize>,
        rect: Rect,
        selected: Vec<u64>,
        pointer: Option<PointerEvent>,
    },
    /// Options button pressed.
    Button {
        area: Area,
        rect: Rect,
        pointer: PointerEvent,
    },
    /// Paging changed or the page size switcher was pressed.
    Paginator {
        area: Area,
        rect: Rect,
        state: PageState,
        pointer: Option<PointerEvent>,
    },
}

/// Where a selection change originated, for building the outgoing event.
#[derive(Debug, Clone)]
pub(super) struct SelectionOrigin {
    pub area: Area,
    pub row: Option<usize>,
    pub col: Option<usize>,
    pub rect: Rect,
    pub pointer: Option<PointerEvent>,
}

// ============================================================================
// Event routing
// ============================================================================

impl<R: TableRow> Table<R> {
    /// Route a primary button click on a cell.
    ///
    /// A click on the selection column, or any click with shift held,
    /// toggles the row's selection, emits a selection event and is fully
    /// consumed. Everything else passes through as a plain click event
    /// without touching selection.
    ///
    /// Clicks on rows excluded from selection are dropped silently.
    pub fn on_primary_click(
        &self,
        event: &PointerEvent,
        area: Area,
        row: usize,
        col: usize,
    ) -> EventResult {
        let rect = ancestor_rect(event, &CELL_TAGS);
        if let Ok(mut guard) = self.inner.write() {
            let Some(slot) = guard.rows.get(row) else {
                log::debug!("click on missing row {row}");
                return EventResult::Ignored;
            };
            if slot.disabled() {
                return EventResult::Ignored;
            }
            let next = !slot.is_selected();
            if area == Area::SelectColumn || event.modifiers.shift {
                guard.rows[row].selected = Some(next);
                guard.refresh_group(Some(SelectionOrigin {
                    area,
                    row: Some(row),
                    col: Some(col),
                    rect,
                    pointer: Some(event.clone()),
                }));
                self.dirty.store(true, Ordering::SeqCst);
                return EventResult::Consumed;
            }
            guard.event_tx.send(TableEvent::Click {
                area,
                row,
                col,
                rect,
                pointer: event.clone(),
            });
        }
        EventResult::Ignored
    }

    /// Route a context menu request on a cell.
    ///
    /// The default menu is always suppressed. Rows excluded from
    /// selection emit nothing.
    pub fn on_context_menu(
        &self,
        event: &PointerEvent,
        area: Area,
        row: usize,
        col: usize,
    ) -> EventResult {
        let rect = ancestor_rect(event, &CELL_TAGS);
        if let Ok(guard) = self.inner.read() {
            let Some(slot) = guard.rows.get(row) else {
                log::debug!("context menu on missing row {row}");
                return EventResult::PreventDefault;
            };
            if slot.disabled() {
                return EventResult::PreventDefault;
            }
            guard.event_tx.send(TableEvent::Context {
                area,
                row,
                col,
                rect,
                pointer: event.clone(),
            });
        }
        EventResult::PreventDefault
    }

    /// Route a click on the row options button.
    pub fn on_options_click(&self, event: &PointerEvent) -> EventResult {
        let rect = ancestor_rect(event, &CELL_TAGS);
        if let Ok(guard) = self.inner.read() {
            guard.event_tx.send(TableEvent::Button {
                area: Area::Options,
                rect,
                pointer: event.clone(),
            });
        }
        EventResult::PreventDefault
    }

    /// Route a click on the page size switcher.
    pub fn on_page_size_click(&self, event: &PointerEvent) -> EventResult {
        let rect = ancestor_rect(event, &BUTTON_TAGS);
        if let Ok(guard) = self.inner.read() {
            guard.event_tx.send(TableEvent::Paginator {
                area: Area::Options,
                rect,
                state: guard.page.clone(),
                pointer: Some(event.clone()),
            });
        }
        EventResult::StopPropagation
    }
}
