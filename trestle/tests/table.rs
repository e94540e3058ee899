use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use trestle::channel::{self, StreamSender};
use trestle::media::MediaObserver;
use trestle::table::{
    Column, Head, PageShow, PaginatorConfig, Region, RowLoader, SortOrder, TableConfig, TableData,
};
use trestle::{Table, TableRow};
use webdom::Breakpoint;

#[derive(Clone, Serialize, Deserialize)]
struct Item {
    id: u64,
}

impl TableRow for Item {
    fn id(&self) -> u64 {
        self.id
    }
}

fn item(id: u64) -> Item {
    Item { id }
}

fn columns(count: usize) -> Vec<Column> {
    (0..count).map(|n| Column::new(format!("Col {n}"))).collect()
}

// ============================================================================
// Configuration Intake
// ============================================================================

#[test]
fn test_ready_after_first_config() {
    let (table, _events) = Table::<Item>::new();
    assert!(!table.is_ready());

    table.apply_config(TableConfig::new());
    assert!(table.is_ready());
}

#[test]
fn test_config_sections_land() {
    let cfg = TableConfig::new()
        .head(Head::new(columns(3)))
        .data(TableData::rows(vec![item(1), item(2)]))
        .paginator(PaginatorConfig::new(95));
    let (table, _events) = Table::with_config(cfg);

    assert_eq!(table.columns().len(), 3);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.page_max(), 10);
    assert_eq!(table.total_count(), 95);
}

#[test]
fn test_empty_rows_keep_previous() {
    let (table, _events) =
        Table::with_config(TableConfig::new().data(TableData::rows(vec![item(1), item(2)])));
    assert_eq!(table.row_count(), 2);

    // An empty row list is "nothing new", not "clear"
    table.apply_config(TableConfig::new().data(TableData::rows(Vec::new())));
    assert_eq!(table.row_count(), 2);

    table.apply_config(TableConfig::new());
    assert_eq!(table.row_count(), 2);

    // Only a non-empty list replaces
    table.apply_config(TableConfig::new().data(TableData::rows(vec![item(9)])));
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_config_parses_from_json() {
    let cfg: TableConfig<Item> = serde_json::from_str(
        r#"{
            "head": {
                "columns": [
                    {"label": "ID", "width": 60.0},
                    {"label": "Info", "minMedia": "lg", "nowrap": true, "sort": "asc"}
                ],
                "height": 32.0
            },
            "data": {"rows": [{"id": 1}, {"id": 2}]},
            "paginator": {"show": "after", "count": 95, "sizeName": "Rows:", "name": "Of:"},
            "width": 800.0,
            "hideLastColumn": true
        }"#,
    )
    .unwrap();

    let head = cfg.head.as_ref().unwrap();
    assert_eq!(head.columns.len(), 2);
    assert_eq!(head.columns[0].width, Some(60.0));
    assert_eq!(head.columns[1].min_media, Some(Breakpoint::Lg));
    assert_eq!(head.columns[1].nowrap, Some(true));
    assert_eq!(head.columns[1].sort, SortOrder::Asc);
    assert_eq!(head.height, Some(32.0));
    assert!(cfg.hide_last_column);
    assert!(!cfg.hide_first_column);

    let (table, _events) = Table::with_config(cfg);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.page_max(), 10);
    assert!(table.page_switch_visible(PageShow::After));
    assert_eq!(table.page_size_label(), "Rows:");
    assert_eq!(table.page_total_label(), "Of:");
}

#[test]
fn test_default_labels() {
    let (table, _events) =
        Table::<Item>::with_config(TableConfig::new().paginator(PaginatorConfig::new(10)));

    assert_eq!(table.page_size_label(), "Show by:");
    assert_eq!(table.page_total_label(), "Total:");
}

// ============================================================================
// Update Feeds
// ============================================================================

#[test]
fn test_update_feed_applies_on_poll() {
    let updates = channel::latest(TableConfig::<Item>::new()).0;
    let (table, _events) = Table::new();
    let table = table.with_updates(updates.subscribe());

    // The value present at subscription counts as seen
    assert_eq!(table.poll(), 0);
    assert!(!table.is_ready());

    updates.send(TableConfig::new().data(TableData::rows(vec![item(1)])));
    assert_eq!(table.poll(), 1);
    assert!(table.is_ready());
    assert_eq!(table.row_count(), 1);

    // Nothing new, nothing applied
    assert_eq!(table.poll(), 0);
}

#[test]
fn test_media_feed_adopted_eagerly() {
    let observer = MediaObserver::new();
    observer.update(1100, 800);

    let (table, _events) = Table::<Item>::new();
    let table = table.with_media(observer.subscribe());
    assert_eq!(table.breakpoint(), Breakpoint::Lg);

    observer.update(500, 700);
    assert_eq!(table.poll(), 1);
    assert_eq!(table.breakpoint(), Breakpoint::Sl);
    assert!(table.media().is_mobile);
}

#[test]
fn test_loader_batches_apply_in_order() {
    let loader: RowLoader<Item> = Arc::new(|| {
        let (tx, rx) = channel::stream();
        tx.send(vec![item(1), item(2)]);
        tx.send(vec![item(3), item(4), item(5)]);
        rx
    });
    let (table, _events) =
        Table::with_config(TableConfig::new().data(TableData::loader(loader)));

    assert_eq!(table.row_count(), 0);
    assert_eq!(table.poll(), 2);

    // The last batch wins
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.row(0).map(|r| r.id), Some(3));
}

#[test]
fn test_new_config_replaces_loader() {
    let handle: Arc<Mutex<Option<StreamSender<Vec<Item>>>>> = Arc::new(Mutex::new(None));
    let loader_handle = Arc::clone(&handle);
    let loader: RowLoader<Item> = Arc::new(move || {
        let (tx, rx) = channel::stream();
        *loader_handle.lock().unwrap() = Some(tx);
        rx
    });

    let (table, _events) =
        Table::with_config(TableConfig::new().data(TableData::loader(loader)));
    let first = handle.lock().unwrap().clone().unwrap();

    first.send(vec![item(1)]);
    assert_eq!(table.poll(), 1);
    assert_eq!(table.row_count(), 1);

    // A config without a loader cancels the running one
    table.apply_config(TableConfig::new());
    first.send(vec![item(2), item(3)]);
    assert_eq!(table.poll(), 0);
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_detach_stops_all_feeds() {
    let updates = channel::latest(TableConfig::<Item>::new()).0;
    let (table, _events) = Table::new();
    let table = table.with_updates(updates.subscribe());

    table.detach();
    updates.send(TableConfig::new().data(TableData::rows(vec![item(1)])));

    assert_eq!(table.poll(), 0);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_dirty_tracking() {
    let (table, _events) = Table::<Item>::new();
    assert!(!table.is_dirty());

    table.apply_config(TableConfig::new());
    assert!(table.is_dirty());

    table.clear_dirty();
    assert!(!table.is_dirty());
}

// ============================================================================
// Columns and Rows
// ============================================================================

#[test]
fn test_column_count_includes_edge_columns() {
    let (table, _events) =
        Table::<Item>::with_config(TableConfig::new().head(Head::new(columns(3))));
    assert_eq!(table.column_count(), 5);

    let (table, _events) = Table::<Item>::with_config(
        TableConfig::new().head(Head::new(columns(3))).hide_first_column(),
    );
    assert_eq!(table.column_count(), 4);

    let (table, _events) = Table::<Item>::with_config(
        TableConfig::new()
            .head(Head::new(columns(3)))
            .hide_first_column()
            .hide_last_column(),
    );
    assert_eq!(table.column_count(), 3);
}

#[test]
fn test_is_header() {
    let (table, _events) = Table::<Item>::with_config(TableConfig::new());
    assert!(!table.is_header());

    let (table, _events) =
        Table::<Item>::with_config(TableConfig::new().head(Head::new(Vec::new())));
    assert!(!table.is_header());

    let (table, _events) =
        Table::<Item>::with_config(TableConfig::new().head(Head::new(columns(1))));
    assert!(table.is_header());
}

#[test]
fn test_visible_columns_follow_media() {
    let observer = MediaObserver::new();
    observer.update(300, 600);

    let (table, _events) = Table::<Item>::new();
    let table = table.with_media(observer.subscribe());
    table.apply_config(TableConfig::new().head(Head::new(columns(5))));

    assert_eq!(table.visible_columns(), vec![0]);
    assert!(table.column_shown(0));
    assert!(!table.column_shown(1));

    observer.update(1100, 800);
    table.poll();
    assert_eq!(table.visible_columns(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_row_name() {
    let (table, _events) =
        Table::with_config(TableConfig::new().data(TableData::rows(vec![item(7), item(9)])));

    assert_eq!(table.row_name(0).as_deref(), Some("row-0-id-7"));
    assert_eq!(table.row_name(1).as_deref(), Some("row-1-id-9"));
    assert_eq!(table.row_name(5), None);
}

// ============================================================================
// Styles
// ============================================================================

#[test]
fn test_table_width_style() {
    let (table, _events) = Table::<Item>::with_config(TableConfig::new().width(800.0));

    let css = table.style(Region::Table).unwrap();
    assert_eq!(css.get("width"), Some("800px"));

    // The page switcher row follows the table width
    let css = table.style(Region::PageSwitch).unwrap();
    assert_eq!(css.get("width"), Some("800px"));
}

#[test]
fn test_full_width_suppresses_width_style() {
    let (table, _events) =
        Table::<Item>::with_config(TableConfig::new().width(800.0).width_full());

    assert!(table.style(Region::Table).is_none());
    assert!(table.style(Region::PageSwitch).is_none());
}

#[test]
fn test_head_row_height_style() {
    let (table, _events) =
        Table::<Item>::with_config(TableConfig::new().head(Head::new(columns(2)).height(32.0)));
    let css = table.style(Region::HeadRow).unwrap();
    assert_eq!(css.get("height"), Some("32px"));

    let (table, _events) =
        Table::<Item>::with_config(TableConfig::new().head(Head::new(columns(2))));
    assert!(table.style(Region::HeadRow).is_none());
}

#[test]
fn test_last_sized_column_absorbs_space() {
    let observer = MediaObserver::new();
    observer.update(1600, 900);

    let head = Head::new(vec![
        Column::new("A").width(60.0),
        Column::new("B").width(120.0),
        Column::new("C").width(90.0),
    ]);
    let (table, _events) = Table::<Item>::new();
    let table = table.with_media(observer.subscribe());
    table.apply_config(TableConfig::new().head(head));

    assert_eq!(
        table.style(Region::Column(0)).unwrap().get("width"),
        Some("60px")
    );
    assert_eq!(
        table.style(Region::Column(1)).unwrap().get("width"),
        Some("120px")
    );
    // With every visible column sized, the last one stays fluid
    assert!(table.style(Region::Column(2)).is_none());
}

#[test]
fn test_unsized_column_keeps_widths_literal() {
    let observer = MediaObserver::new();
    observer.update(1600, 900);

    let head = Head::new(vec![
        Column::new("A").width(60.0),
        Column::new("B"),
        Column::new("C").width(90.0),
    ]);
    let (table, _events) = Table::<Item>::new();
    let table = table.with_media(observer.subscribe());
    table.apply_config(TableConfig::new().head(head));

    assert_eq!(
        table.style(Region::Column(0)).unwrap().get("width"),
        Some("60px")
    );
    // No width declared, nothing to emit
    assert!(table.style(Region::Column(1)).is_none());
    assert_eq!(
        table.style(Region::Column(2)).unwrap().get("width"),
        Some("90px")
    );
}

#[test]
fn test_single_visible_column_unconstrained() {
    let observer = MediaObserver::new();
    observer.update(300, 600);

    let head = Head::new(vec![
        Column::new("A").width(60.0),
        Column::new("B").width(120.0),
    ]);
    let (table, _events) = Table::<Item>::new();
    let table = table.with_media(observer.subscribe());
    table.apply_config(TableConfig::new().head(head));

    // Cap of 1 leaves a single column; it fills the table
    assert_eq!(table.visible_columns(), vec![0]);
    assert!(table.style(Region::Column(0)).is_none());
}

// ============================================================================
// Header Classes
// ============================================================================

#[test]
fn test_column_classes_wrap_default() {
    let (table, _events) =
        Table::<Item>::with_config(TableConfig::new().head(Head::new(columns(1))));

    assert_eq!(
        table.column_classes(0),
        Some(vec!["content-head-wrap".to_string()])
    );
}

#[test]
fn test_column_classes_nowrap() {
    let head = Head::new(vec![
        Column::new("A").nowrap(true),
        Column::new("B").nowrap(false),
    ]);
    let (table, _events) = Table::<Item>::with_config(TableConfig::new().head(head));

    assert_eq!(
        table.column_classes(0),
        Some(vec!["content-head-nowrap".to_string()])
    );
    // Explicit wrapping gets no class at all
    assert_eq!(table.column_classes(1), None);
}

#[test]
fn test_column_classes_sort_indicator() {
    let head = Head::new(vec![
        Column::new("A").class("numeric").sort(SortOrder::Asc),
        Column::new("B").nowrap(true).sort(SortOrder::Desc),
    ]);
    let (table, _events) = Table::<Item>::with_config(TableConfig::new().head(head));

    assert_eq!(
        table.column_classes(0),
        Some(vec![
            "numeric".to_string(),
            "content-head-wrap".to_string(),
            "head-asc".to_string(),
            "head-sorting-space".to_string(),
        ])
    );
    assert_eq!(
        table.column_classes(1),
        Some(vec![
            "content-head-nowrap".to_string(),
            "head-desc".to_string(),
            "head-sorting-space".to_string(),
        ])
    );
}

#[test]
fn test_column_classes_unknown_column() {
    let (table, _events) =
        Table::<Item>::with_config(TableConfig::new().head(Head::new(columns(1))));

    assert_eq!(table.column_classes(7), None);
}
