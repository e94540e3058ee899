//! Breadcrumb trail state.

use serde::{Deserialize, Serialize};

use crate::channel::{LatestReceiver, LatestSender};

/// One section in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Crumb {
    /// Section title
    pub name: String,
    /// Internal link target; empty or absent renders as plain text
    pub href: Option<String>,
}

impl Crumb {
    /// A crumb without a link.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: None,
        }
    }

    /// A crumb linking to an internal target.
    pub fn link(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: Some(href.into()),
        }
    }
}

/// Shared breadcrumb trail, broadcast to every subscribed component.
///
/// Navigation glue writes the trail on route changes; breadcrumb
/// components subscribe and render.
#[derive(Clone, Debug)]
pub struct BreadcrumbTrail {
    tx: LatestSender<Vec<Crumb>>,
}

impl Default for BreadcrumbTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadcrumbTrail {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self {
            tx: LatestSender::new(Vec::new()),
        }
    }

    /// The current trail.
    pub fn crumbs(&self) -> Vec<Crumb> {
        self.tx.get()
    }

    /// Replace the whole trail and broadcast.
    pub fn set(&self, crumbs: Vec<Crumb>) {
        self.tx.send(crumbs);
    }

    /// Append one crumb and broadcast.
    pub fn push(&self, crumb: Crumb) {
        let mut crumbs = self.tx.get();
        crumbs.push(crumb);
        self.tx.send(crumbs);
    }

    /// Drop all crumbs and broadcast.
    pub fn clear(&self) {
        self.tx.send(Vec::new());
    }

    /// Whether crumb `n` is the last one in the trail.
    pub fn is_last(&self, n: usize) -> bool {
        let crumbs = self.tx.get();
        !crumbs.is_empty() && n == crumbs.len() - 1
    }

    /// Whether crumb `n` renders as a link: present and not last, with
    /// a non-empty target.
    pub fn is_link(&self, n: usize) -> bool {
        let crumbs = self.tx.get();
        if n >= crumbs.len() {
            return false;
        }
        let last = n == crumbs.len() - 1;
        !last
            && crumbs[n]
                .href
                .as_ref()
                .map(|href| !href.is_empty())
                .unwrap_or(false)
    }

    /// Subscribe to trail changes.
    pub fn subscribe(&self) -> LatestReceiver<Vec<Crumb>> {
        self.tx.subscribe()
    }
}
