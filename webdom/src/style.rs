use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An inline style fragment: CSS properties mapped to rendered values.
///
/// Fragments are built by components and merged before being handed to the
/// host. A property set first wins; later writes to the same property are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Css {
    props: BTreeMap<String, String>,
}

impl Css {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment holding a single property.
    pub fn with(prop: impl Into<String>, value: impl Into<String>) -> Self {
        let mut css = Self::new();
        css.set(prop, value);
        css
    }

    /// A pixel width fragment.
    pub fn width_px(px: f32) -> Self {
        Self::with("width", format!("{px}px"))
    }

    /// A pixel height fragment.
    pub fn height_px(px: f32) -> Self {
        Self::with("height", format!("{px}px"))
    }

    /// Set a property unless it is already present.
    pub fn set(&mut self, prop: impl Into<String>, value: impl Into<String>) -> &mut Self {
        if let Entry::Vacant(entry) = self.props.entry(prop.into()) {
            entry.insert(value.into());
        }
        self
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.props.get(prop).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props
            .iter()
            .map(|(prop, value)| (prop.as_str(), value.as_str()))
    }

    /// Merge fragments left to right. On a property conflict the earliest
    /// fragment wins. Returns `None` when nothing ends up in the result.
    pub fn merge<I>(fragments: I) -> Option<Css>
    where
        I: IntoIterator<Item = Option<Css>>,
    {
        let mut ret = Css::new();
        for fragment in fragments.into_iter().flatten() {
            for (prop, value) in fragment.props {
                ret.set(prop, value);
            }
        }
        if ret.is_empty() {
            None
        } else {
            Some(ret)
        }
    }
}

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (prop, value) in &self.props {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", prop, value)?;
            first = false;
        }
        Ok(())
    }
}
