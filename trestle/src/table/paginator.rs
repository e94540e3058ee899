//! Paging configuration and derived page state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size presets offered by the page size switcher.
pub const PAGE_SIZES: [i64; 10] = [3, 10, 15, 20, 25, 30, 50, 100, 250, 500];

/// Page size applied when the configuration does not set one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Label shown before the page size switcher when none is configured.
pub const DEFAULT_SIZE_LABEL: &str = "Show by:";

/// Label shown before the total row count when none is configured.
pub const DEFAULT_TOTAL_LABEL: &str = "Total:";

/// Placement of the page switcher relative to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageShow {
    /// Hidden
    #[default]
    None,
    /// Above the table only
    Before,
    /// Below the table only
    After,
    /// Above and below
    All,
}

impl fmt::Display for PageShow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageShow::None => "none",
            PageShow::Before => "before",
            PageShow::After => "after",
            PageShow::All => "all",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when a page switcher placement name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page switcher placement: {0:?}")]
pub struct ParsePageShowError(pub String);

impl FromStr for PageShow {
    type Err = ParsePageShowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(PageShow::None),
            "before" => Ok(PageShow::Before),
            "after" => Ok(PageShow::After),
            "all" => Ok(PageShow::All),
            _ => Err(ParsePageShowError(s.to_string())),
        }
    }
}

/// Paging section of the table configuration.
///
/// Paging activates only when `count` is positive; everything else has
/// a usable default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginatorConfig {
    /// Where the page switcher is rendered
    pub show: PageShow,
    /// Total row count across all pages
    pub count: i64,
    /// Rows per page; non-positive falls back to [`DEFAULT_PAGE_SIZE`]
    pub size: i64,
    /// Requested page number; the live page number takes precedence
    /// once the table is running
    pub current: Option<i64>,
    /// Label before the page size switcher
    #[serde(rename = "sizeName")]
    pub size_label: Option<String>,
    /// Label before the total row count
    #[serde(rename = "name")]
    pub total_label: Option<String>,
}

impl PaginatorConfig {
    /// Create a paging configuration for `count` total rows.
    pub fn new(count: i64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Set the page switcher placement.
    pub fn show(mut self, show: PageShow) -> Self {
        self.show = show;
        self
    }

    /// Set the rows-per-page size.
    pub fn size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    /// Set the label before the page size switcher.
    pub fn size_label(mut self, label: impl Into<String>) -> Self {
        self.size_label = Some(label.into());
        self
    }

    /// Set the label before the total row count.
    pub fn total_label(mut self, label: impl Into<String>) -> Self {
        self.total_label = Some(label.into());
        self
    }
}

/// Live paging state derived from the configuration.
///
/// Carried in paginator events so consumers see the page, size and
/// bounds that produced the interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    /// Where the page switcher is rendered
    pub show: PageShow,
    /// Total row count across all pages
    pub count: i64,
    /// Rows per page
    pub size: i64,
    /// Current page number, starting at 1
    pub current: i64,
    /// Last page number
    pub max: i64,
    /// Label before the page size switcher
    #[serde(rename = "sizeName")]
    pub size_label: Option<String>,
    /// Label before the total row count
    #[serde(rename = "name")]
    pub total_label: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            show: PageShow::None,
            count: 0,
            size: 0,
            current: 1,
            max: 1,
            size_label: None,
            total_label: None,
        }
    }
}

impl PageState {
    /// Derive the page state for a configuration, keeping the live page
    /// number from `prev`.
    ///
    /// A missing configuration or a non-positive count resets paging to
    /// the inactive default. The carried page number is floored to 1 but
    /// deliberately not clamped to the new maximum; the clamp happens on
    /// the next page change so consumers can observe the overflow.
    pub fn recompute(cfg: Option<&PaginatorConfig>, prev: &PageState) -> PageState {
        let Some(cfg) = cfg else {
            return PageState::default();
        };
        if cfg.count <= 0 {
            return PageState::default();
        }

        let size = if cfg.size > 0 { cfg.size } else { DEFAULT_PAGE_SIZE };
        let mut max = cfg.count / size;
        if max * size < cfg.count {
            max += 1;
        }
        let mut current = prev.current;
        if current <= 0 {
            current = 1;
        }

        PageState {
            show: cfg.show,
            count: cfg.count,
            size,
            current,
            max,
            size_label: cfg.size_label.clone(),
            total_label: cfg.total_label.clone(),
        }
    }

    /// Whether paging is active.
    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}
