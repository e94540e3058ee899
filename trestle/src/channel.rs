//! Channel primitives for component state.
//!
//! Two flavors cover every feed in the crate:
//!
//! - [`latest`]: a slot holding the most recent value. Receivers always
//!   observe the newest state and can await changes. Used for config
//!   pushes, media updates and service state broadcasts.
//! - [`stream`]: an unbounded in-order queue. Every item is delivered.
//!   Used for interaction events and row loads.

use std::fmt;

use tokio::sync::{mpsc, watch};

// ============================================================================
// Latest-value channel
// ============================================================================

/// Sender half of a latest-value channel.
pub struct LatestSender<T> {
    tx: watch::Sender<T>,
}

impl<T> LatestSender<T> {
    /// Create a standalone sender seeded with `initial`.
    ///
    /// Receivers are minted later via [`LatestSender::subscribe`].
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Publish a new value, replacing the previous one.
    ///
    /// Non-blocking. Succeeds even with no receivers attached; a receiver
    /// subscribed afterwards still observes the value.
    pub fn send(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Return a copy of the current value without notifying anyone.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Create a receiver for this channel.
    ///
    /// The current value counts as already seen.
    pub fn subscribe(&self) -> LatestReceiver<T> {
        LatestReceiver {
            rx: self.tx.subscribe(),
        }
    }
}

impl<T> Clone for LatestSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> fmt::Debug for LatestSender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatestSender").finish_non_exhaustive()
    }
}

/// Receiver half of a latest-value channel.
pub struct LatestReceiver<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> LatestReceiver<T> {
    /// Return the current value, marking it as seen.
    pub fn get(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }

    /// Whether a value newer than the last seen one is available.
    pub fn is_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for a new value.
    ///
    /// Returns `false` when the sender is gone and no further values
    /// can arrive.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

impl<T> Clone for LatestReceiver<T> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}

impl<T> fmt::Debug for LatestReceiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatestReceiver").finish_non_exhaustive()
    }
}

/// Create a latest-value channel pair seeded with `initial`.
pub fn latest<T>(initial: T) -> (LatestSender<T>, LatestReceiver<T>) {
    let (tx, rx) = watch::channel(initial);
    (LatestSender { tx }, LatestReceiver { rx })
}

// ============================================================================
// Stream channel
// ============================================================================

/// Sender half of a stream channel.
pub struct StreamSender<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> StreamSender<T> {
    /// Queue an item.
    ///
    /// Non-blocking. If the receiver is gone the item is dropped.
    pub fn send(&self, value: T) {
        if self.tx.send(value).is_err() {
            log::trace!("stream receiver gone, item dropped");
        }
    }
}

impl<T> Clone for StreamSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> fmt::Debug for StreamSender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSender").finish_non_exhaustive()
    }
}

/// Receiver half of a stream channel.
pub struct StreamReceiver<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> StreamReceiver<T> {
    /// Wait for the next item.
    ///
    /// Returns `None` once all senders are gone and the queue is empty.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Take the next item if one is already queued.
    pub fn try_next(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Discard all queued items.
    pub fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

impl<T> fmt::Debug for StreamReceiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamReceiver").finish_non_exhaustive()
    }
}

/// Create a stream channel pair.
pub fn stream<T>() -> (StreamSender<T>, StreamReceiver<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (StreamSender { tx }, StreamReceiver { rx })
}
