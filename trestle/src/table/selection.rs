//! Row selection aggregation.
//!
//! Selection is tracked per row slot; the group checkbox shows a
//! tri-state derived over the selectable rows only. Rows flagged
//! non-selectable never count toward the aggregate.

use crate::table::row::{RowSlot, TableRow};

/// Derive the group selection flag and the selected row ids.
///
/// Disabled rows are skipped entirely. Over the rest: all selected
/// reads `Some(true)` and none selected reads `Some(false)`; a mix
/// reads `None`. With no selectable rows at all the empty set counts
/// as "none selected". Ids come back in row order.
pub(crate) fn group_flag<R: TableRow>(slots: &[RowSlot<R>]) -> (Option<bool>, Vec<u64>) {
    let mut total = 0usize;
    let mut selected = 0usize;
    let mut unselected = 0usize;
    let mut ids = Vec::new();

    for slot in slots {
        if slot.disabled() {
            continue;
        }
        total += 1;
        if slot.is_selected() {
            selected += 1;
            ids.push(slot.row.id());
        } else {
            unselected += 1;
        }
    }

    let mut flag = None;
    if selected == total {
        flag = Some(true);
    }
    if unselected == total {
        flag = Some(false);
    }
    if selected > 0 && unselected > 0 {
        flag = None;
    }

    (flag, ids)
}

/// Write `flag` into every selectable row slot.
pub(crate) fn set_all<R: TableRow>(slots: &mut [RowSlot<R>], flag: bool) {
    for slot in slots {
        if slot.disabled() {
            continue;
        }
        slot.selected = Some(flag);
    }
}
