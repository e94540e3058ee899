//! Application menu state.
//!
//! One service is the single entry point for menu control: visibility
//! transitions between open, closed and thin, the mobile/desktop mode
//! switch, the current section and the menu content. Components
//! subscribe to the condition and content feeds and render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::channel::{LatestReceiver, LatestSender};
use crate::media::Media;

/// Menu visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuView {
    /// Fully visible
    Open,
    /// Hidden
    #[default]
    #[serde(rename = "close")]
    Closed,
    /// Collapsed to icons
    Thin,
}

impl fmt::Display for MenuView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MenuView::Open => "open",
            MenuView::Closed => "close",
            MenuView::Thin => "thin",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when a menu view name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu view: {0:?}")]
pub struct ParseMenuViewError(pub String);

impl FromStr for MenuView {
    type Err = ParseMenuViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(MenuView::Open),
            "close" => Ok(MenuView::Closed),
            "thin" => Ok(MenuView::Thin),
            _ => Err(ParseMenuViewError(s.to_string())),
        }
    }
}

/// Live menu condition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuCondition {
    /// Visibility state
    pub view: MenuView,
    /// Mobile interface mode
    pub is_mobile: bool,
    /// Menu title
    pub title: Option<String>,
    /// Urn of the current section
    pub current: Option<String>,
}

/// One menu section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique section identifier
    pub urn: String,
    /// Shown but not selectable
    #[serde(default)]
    pub disabled: bool,
    /// Title applied to the menu when the section becomes current
    #[serde(default)]
    pub title: Option<String>,
    /// Section display name
    #[serde(default)]
    pub name: Option<String>,
    /// Notification count badge
    #[serde(default)]
    pub sticker: Option<u32>,
    /// Icon for the active section
    #[serde(default)]
    pub icon_active: Option<String>,
    /// Icon for a passive or disabled section
    #[serde(default)]
    pub icon_passive: Option<String>,
    /// Icon shown on hover
    #[serde(default)]
    pub icon_hover: Option<String>,
}

impl MenuItem {
    /// Create a section with an identifier.
    pub fn new(urn: impl Into<String>) -> Self {
        Self {
            urn: urn.into(),
            disabled: false,
            title: None,
            name: None,
            sticker: None,
            icon_active: None,
            icon_passive: None,
            icon_hover: None,
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the title applied when the section becomes current.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Mark the section as shown but not selectable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the notification count badge.
    pub fn sticker(mut self, count: u32) -> Self {
        self.sticker = Some(count);
        self
    }
}

/// Full menu content: title plus the section list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuContent {
    /// Title applied to the condition when the content is set
    pub title: Option<String>,
    /// Menu sections
    pub items: Vec<MenuItem>,
}

impl MenuContent {
    /// Create content from a section list.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { title: None, items }
    }

    /// Set the menu title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Application menu service.
///
/// Mobile and desktop behave differently: on desktop a closed menu
/// reopens automatically and "close" collapses to the thin view, on
/// mobile the menu really closes.
#[derive(Clone, Debug)]
pub struct Menu {
    condition_tx: LatestSender<MenuCondition>,
    content_tx: LatestSender<MenuContent>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// Create a menu in the closed desktop state with empty content.
    pub fn new() -> Self {
        Self {
            condition_tx: LatestSender::new(MenuCondition::default()),
            content_tx: LatestSender::new(MenuContent::default()),
        }
    }

    // On desktop the menu never stays fully closed.
    fn ensure_desktop_open(condition: &mut MenuCondition) -> bool {
        if !condition.is_mobile && condition.view == MenuView::Closed {
            condition.view = MenuView::Open;
            return true;
        }
        false
    }

    /// Switch between the mobile and desktop interface modes.
    ///
    /// Entering mobile closes an open menu; leaving mobile opens it.
    pub fn set_mobile(&self, is_mobile: bool) {
        let mut condition = self.condition_tx.get();
        if !condition.is_mobile && is_mobile && condition.view == MenuView::Open {
            condition.view = MenuView::Closed;
        } else if condition.is_mobile && !is_mobile {
            condition.view = MenuView::Open;
        }
        condition.is_mobile = is_mobile;
        Self::ensure_desktop_open(&mut condition);
        self.condition_tx.send(condition);
    }

    /// Apply a media update: adopt the mobile flag and reopen the menu
    /// on desktop if it ended up closed.
    pub fn apply_media(&self, media: &Media) {
        if self.condition_tx.get().is_mobile != media.is_mobile {
            self.set_mobile(media.is_mobile);
        }
        let mut condition = self.condition_tx.get();
        if Self::ensure_desktop_open(&mut condition) {
            self.condition_tx.send(condition);
        }
    }

    /// Open the menu.
    pub fn open(&self) {
        let mut condition = self.condition_tx.get();
        if condition.view != MenuView::Open {
            condition.view = MenuView::Open;
            self.condition_tx.send(condition);
        }
    }

    /// Close the menu: hidden on mobile, collapsed to thin on desktop.
    pub fn close(&self) {
        let mut condition = self.condition_tx.get();
        if condition.is_mobile && condition.view != MenuView::Closed {
            condition.view = MenuView::Closed;
            self.condition_tx.send(condition);
        } else if !condition.is_mobile && condition.view != MenuView::Thin {
            condition.view = MenuView::Thin;
            self.condition_tx.send(condition);
        }
    }

    /// Toggle between open and closed/thin.
    pub fn toggle(&self) {
        if self.condition_tx.get().view == MenuView::Open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Record the current section.
    pub fn set_current(&self, urn: impl Into<String>) {
        let mut condition = self.condition_tx.get();
        condition.current = Some(urn.into());
        self.condition_tx.send(condition);
    }

    /// Select a section: record it as current and, on mobile, close the
    /// menu that was opened to pick it.
    ///
    /// The navigation itself is the host's job.
    pub fn select(&self, urn: impl Into<String>) {
        let mut condition = self.condition_tx.get();
        if condition.is_mobile && condition.view == MenuView::Open {
            condition.view = MenuView::Closed;
        }
        condition.current = Some(urn.into());
        self.condition_tx.send(condition);
    }

    /// Set the menu title.
    pub fn set_title(&self, title: Option<String>) {
        let mut condition = self.condition_tx.get();
        condition.title = title;
        self.condition_tx.send(condition);
    }

    /// Replace the menu content.
    ///
    /// A content title is copied into the condition.
    pub fn set_content(&self, content: MenuContent) {
        if let Some(title) = &content.title {
            self.set_title(Some(title.clone()));
        }
        self.content_tx.send(content);
    }

    /// The current menu condition.
    pub fn condition(&self) -> MenuCondition {
        self.condition_tx.get()
    }

    /// The current menu content.
    pub fn content(&self) -> MenuContent {
        self.content_tx.get()
    }

    /// Urn of the current section.
    pub fn current(&self) -> Option<String> {
        self.condition_tx.get().current
    }

    /// Subscribe to condition changes.
    pub fn subscribe_condition(&self) -> LatestReceiver<MenuCondition> {
        self.condition_tx.subscribe()
    }

    /// Subscribe to content changes.
    pub fn subscribe_content(&self) -> LatestReceiver<MenuContent> {
        self.content_tx.subscribe()
    }
}
