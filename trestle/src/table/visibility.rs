//! Column visibility by breakpoint.
//!
//! Narrow viewports cannot fit every column. Each breakpoint carries a
//! maximum visible column count and each column may require a minimum
//! breakpoint; the resolver combines both into a per-breakpoint show map.

use webdom::Breakpoint;

use crate::table::config::Column;

/// Maximum visible column count per breakpoint.
///
/// Indexed by breakpoint, narrowest to widest. The two widest buckets
/// are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCaps([usize; 7]);

impl ColumnCaps {
    /// Maximum visible column count at `breakpoint`.
    pub fn get(self, breakpoint: Breakpoint) -> usize {
        self.0[breakpoint as usize]
    }

    /// Override the cap for one breakpoint.
    pub fn with(mut self, breakpoint: Breakpoint, max: usize) -> Self {
        self.0[breakpoint as usize] = max;
        self
    }
}

impl Default for ColumnCaps {
    fn default() -> Self {
        Self([1, 2, 4, 4, 6, usize::MAX, usize::MAX])
    }
}

/// Per-breakpoint map from column index to "shown".
///
/// Resolved once per configuration apply; lookups afterwards are cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowMap {
    maps: [Vec<bool>; 7],
}

impl ShowMap {
    /// Resolve the show map for an ordered column list.
    ///
    /// Two passes per breakpoint. The first marks a column eligible when
    /// it has no minimum breakpoint or the bucket's lower bound reaches
    /// the required one. The second walks columns in declared order and
    /// hides every eligible column past the cap, so the first columns
    /// that fit win and later ones yield.
    pub fn resolve(columns: &[Column], caps: ColumnCaps) -> Self {
        let mut maps: [Vec<bool>; 7] = Default::default();

        for bp in Breakpoint::ALL {
            let map = &mut maps[bp as usize];
            for col in columns {
                let eligible = match col.min_media {
                    Some(required) => bp.min_width() >= required.min_width(),
                    None => true,
                };
                map.push(eligible);
            }

            let max = caps.get(bp);
            let mut shown = 0usize;
            for entry in map.iter_mut() {
                if *entry && shown >= max {
                    *entry = false;
                }
                if *entry {
                    shown += 1;
                }
            }
        }

        Self { maps }
    }

    /// Whether column `col` is shown at `breakpoint`.
    ///
    /// Unknown indices read as hidden.
    pub fn is_shown(&self, breakpoint: Breakpoint, col: usize) -> bool {
        self.maps[breakpoint as usize]
            .get(col)
            .copied()
            .unwrap_or(false)
    }

    /// The full per-column map for one breakpoint.
    pub fn shown(&self, breakpoint: Breakpoint) -> &[bool] {
        &self.maps[breakpoint as usize]
    }

    /// Number of columns shown at `breakpoint`.
    pub fn shown_count(&self, breakpoint: Breakpoint) -> usize {
        self.maps[breakpoint as usize]
            .iter()
            .filter(|shown| **shown)
            .count()
    }
}
