use trestle::table::{Column, ColumnCaps, ShowMap};
use webdom::Breakpoint;

fn unrestricted(count: usize) -> Vec<Column> {
    (0..count).map(|n| Column::new(format!("Col {n}"))).collect()
}

// ============================================================================
// Caps
// ============================================================================

#[test]
fn test_default_caps() {
    let caps = ColumnCaps::default();

    assert_eq!(caps.get(Breakpoint::Lo), 1);
    assert_eq!(caps.get(Breakpoint::Sl), 2);
    assert_eq!(caps.get(Breakpoint::Sm), 4);
    assert_eq!(caps.get(Breakpoint::Md), 4);
    assert_eq!(caps.get(Breakpoint::Lg), 6);

    // The widest buckets are unbounded
    assert_eq!(caps.get(Breakpoint::Xl), usize::MAX);
    assert_eq!(caps.get(Breakpoint::Xxl), usize::MAX);
}

#[test]
fn test_cap_override() {
    let caps = ColumnCaps::default().with(Breakpoint::Lg, 2);

    assert_eq!(caps.get(Breakpoint::Lg), 2);
    // Other buckets untouched
    assert_eq!(caps.get(Breakpoint::Md), 4);
}

// ============================================================================
// Show Map Resolution
// ============================================================================

#[test]
fn test_cap_limits_columns_per_breakpoint() {
    let map = ShowMap::resolve(&unrestricted(5), ColumnCaps::default());

    assert_eq!(map.shown_count(Breakpoint::Lo), 1);
    assert_eq!(map.shown_count(Breakpoint::Sl), 2);
    assert_eq!(map.shown_count(Breakpoint::Sm), 4);
    assert_eq!(map.shown_count(Breakpoint::Md), 4);

    // Caps above the column count change nothing
    assert_eq!(map.shown_count(Breakpoint::Lg), 5);
    assert_eq!(map.shown_count(Breakpoint::Xxl), 5);
}

#[test]
fn test_first_declared_columns_win() {
    let map = ShowMap::resolve(&unrestricted(5), ColumnCaps::default());

    // Cap of 2: the first two declared columns survive
    assert!(map.is_shown(Breakpoint::Sl, 0));
    assert!(map.is_shown(Breakpoint::Sl, 1));
    assert!(!map.is_shown(Breakpoint::Sl, 2));
    assert!(!map.is_shown(Breakpoint::Sl, 3));
    assert!(!map.is_shown(Breakpoint::Sl, 4));
}

#[test]
fn test_min_media_gates_eligibility() {
    let columns = vec![
        Column::new("Always"),
        Column::new("Wide only").min_media(Breakpoint::Lg),
    ];
    let map = ShowMap::resolve(&columns, ColumnCaps::default());

    assert!(!map.is_shown(Breakpoint::Sm, 1));
    assert!(!map.is_shown(Breakpoint::Md, 1));

    // Shown from the required breakpoint upward
    assert!(map.is_shown(Breakpoint::Lg, 1));
    assert!(map.is_shown(Breakpoint::Xl, 1));
    assert!(map.is_shown(Breakpoint::Xxl, 1));
}

#[test]
fn test_ineligible_column_frees_the_cap() {
    let columns = vec![
        Column::new("Wide only").min_media(Breakpoint::Lg),
        Column::new("B"),
        Column::new("C"),
    ];
    let map = ShowMap::resolve(&columns, ColumnCaps::default());

    // Cap of 1 at Lo: the media-gated column does not consume it
    assert!(!map.is_shown(Breakpoint::Lo, 0));
    assert!(map.is_shown(Breakpoint::Lo, 1));
    assert!(!map.is_shown(Breakpoint::Lo, 2));
}

#[test]
fn test_custom_caps_apply() {
    let caps = ColumnCaps::default().with(Breakpoint::Lg, 2);
    let map = ShowMap::resolve(&unrestricted(5), caps);

    assert_eq!(map.shown_count(Breakpoint::Lg), 2);
    assert!(map.is_shown(Breakpoint::Lg, 0));
    assert!(map.is_shown(Breakpoint::Lg, 1));
    assert!(!map.is_shown(Breakpoint::Lg, 2));
}

#[test]
fn test_unknown_index_reads_hidden() {
    let map = ShowMap::resolve(&unrestricted(2), ColumnCaps::default());

    assert!(!map.is_shown(Breakpoint::Xxl, 2));
    assert!(!map.is_shown(Breakpoint::Lo, 99));
}

#[test]
fn test_empty_columns() {
    let map = ShowMap::resolve(&[], ColumnCaps::default());

    for bp in Breakpoint::ALL {
        assert_eq!(map.shown_count(bp), 0);
        assert!(map.shown(bp).is_empty());
    }
}
