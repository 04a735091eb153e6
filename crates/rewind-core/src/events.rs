//! Typed publish/subscribe channels.
//!
//! One [`EventBus`] per notification kind replaces the multicast
//! delegate pattern: subscribers hold a [`Subscription`] whose lifetime
//! is their own, and a dropped subscriber is pruned on the next publish
//! instead of dangling. Built on `crossbeam-channel` unbounded channels;
//! in the single-threaded tick model publishing never blocks and
//! subscribers drain between ticks.

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

/// A typed broadcast channel for one notification kind.
///
/// Publishing clones the payload once per live subscriber. Subscribers
/// that have been dropped are removed during publish.
pub struct EventBus<T: Clone> {
    subscribers: Vec<Sender<T>>,
}

impl<T: Clone> EventBus<T> {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a new subscriber and return its subscription handle.
    pub fn subscribe(&mut self) -> Subscription<T> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        Subscription { rx }
    }

    /// Broadcast `event` to all live subscribers.
    ///
    /// Subscribers whose [`Subscription`] has been dropped are pruned
    /// here. Returns the number of subscribers that received the event.
    pub fn publish(&mut self, event: T) -> usize {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        self.subscribers.len()
    }

    /// Number of live subscribers at the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A subscriber's end of an [`EventBus`].
///
/// Dropping the subscription unsubscribes; no explicit deregistration
/// call exists or is needed.
pub struct Subscription<T> {
    rx: Receiver<T>,
}

impl<T> Subscription<T> {
    /// Take the next pending event, if any. Never blocks.
    pub fn poll(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events.
    pub fn drain(&self) -> Vec<T> {
        self.rx.try_iter().collect()
    }
}
