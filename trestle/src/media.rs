//! Viewport media state.
//!
//! Components that adapt to the viewport subscribe to a [`MediaObserver`]
//! and receive a [`Media`] snapshot on every resize. The host glue feeds
//! viewport sizes in; everything derived (breakpoint, mobile flag) is
//! computed here.

use webdom::Breakpoint;

use crate::channel::{LatestReceiver, LatestSender};

/// Snapshot of the viewport media state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Media {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Breakpoint the width falls into
    pub breakpoint: Breakpoint,
    /// Below the tablet threshold
    pub is_mobile: bool,
    /// Touch input available
    pub is_touch: bool,
}

impl Default for Media {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            breakpoint: Breakpoint::Lo,
            is_mobile: false,
            is_touch: false,
        }
    }
}

impl Media {
    /// Derive the media state for a viewport size.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let breakpoint = Breakpoint::for_width(width);
        Self {
            width,
            height,
            breakpoint,
            is_mobile: breakpoint.is_mobile(),
            is_touch: false,
        }
    }

    /// Set the touch flag.
    pub fn with_touch(mut self, touch: bool) -> Self {
        self.is_touch = touch;
        self
    }
}

/// Broadcasts viewport media state to subscribed components.
///
/// The observer itself is passive. The host glue calls
/// [`update`](MediaObserver::update) on resize; every subscriber sees
/// the latest snapshot.
#[derive(Clone, Debug)]
pub struct MediaObserver {
    tx: LatestSender<Media>,
}

impl Default for MediaObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaObserver {
    /// Create an observer with the zero-size initial state.
    pub fn new() -> Self {
        Self {
            tx: LatestSender::new(Media::default()),
        }
    }

    /// Apply a viewport resize and broadcast the derived state.
    ///
    /// The touch flag is a device property, so it carries over.
    pub fn update(&self, width: u32, height: u32) {
        let touch = self.tx.get().is_touch;
        self.tx.send(Media::for_viewport(width, height).with_touch(touch));
    }

    /// Record whether touch input is available and broadcast.
    pub fn set_touch(&self, touch: bool) {
        let media = self.tx.get().with_touch(touch);
        self.tx.send(media);
    }

    /// The current media state.
    pub fn media(&self) -> Media {
        self.tx.get()
    }

    /// Subscribe to media updates.
    pub fn subscribe(&self) -> LatestReceiver<Media> {
        self.tx.subscribe()
    }
}
