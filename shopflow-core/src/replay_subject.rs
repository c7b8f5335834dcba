// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject with a last-item cache.
//!
//! A [`ReplaySubject`] broadcasts each [`StreamItem<T>`](crate::StreamItem) to
//! all active subscribers and keeps the most recent item so that a late
//! subscriber immediately observes the current state of the stream.
//!
//! ## Characteristics
//!
//! - **Replay-on-late-subscribe**: A new subscriber first receives the cached
//!   last item (value or terminal error), then live items.
//! - **Unbounded**: Uses unbounded channels internally (no backpressure).
//! - **Thread-safe**: Cheap to clone; all clones share the same internal state.
//! - **Error/close**: An error is broadcast, cached as the terminal item and
//!   terminates the subject. Subscribers attaching after termination still
//!   receive the cached item, followed by end of stream.
//!
//! ## Example
//!
//! ```
//! use shopflow_core::{ReplaySubject, StreamItem};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = ReplaySubject::<i32>::new();
//! subject.next(1).unwrap();
//!
//! // Late subscriber: the last item is replayed
//! let mut stream = subject.subscribe();
//! assert_eq!(stream.next().await, Some(StreamItem::Value(1)));
//!
//! subject.next(2).unwrap();
//! assert_eq!(stream.next().await, Some(StreamItem::Value(2)));
//! # }
//! ```

use crate::{FlowError, StreamItem, SubjectError};
use async_channel::Sender;
use futures::stream::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for the boxed stream handed to each subscriber.
pub type SubjectBoxStream<T> = Pin<Box<dyn Stream<Item = StreamItem<T>> + Send + Sync + 'static>>;

struct ReplayState<T> {
    closed: bool,
    latest: Option<StreamItem<T>>,
    senders: Vec<Sender<StreamItem<T>>>,
}

/// A hot, unbounded subject that broadcasts items to all current subscribers
/// and replays the most recent item to late subscribers.
///
/// `ReplaySubject` is the backing store for every cached stage of the
/// pipeline: it is the observer list plus last-value cache that gives shared
/// streams their replay semantics.
///
/// See the [module documentation](self) for examples and more details.
pub struct ReplaySubject<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<ReplayState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> ReplaySubject<T> {
    /// Creates a new subject with no subscribers and an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(None)
    }

    /// Creates a subject whose cache is pre-seeded with `item`.
    ///
    /// The seeded item is replayed to every subscriber exactly as if it had
    /// been sent through the subject.
    #[must_use]
    pub fn with_latest(item: StreamItem<T>) -> Self {
        Self::with_state(Some(item))
    }

    fn with_state(latest: Option<StreamItem<T>>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ReplayState {
                closed: false,
                latest,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject and receive a stream of `StreamItem<T>`.
    ///
    /// The cached last item, if any, is delivered first. Subscribing never
    /// fails: after termination the returned stream yields the cached item
    /// (the terminal error, or the last value before `close`) and then ends.
    pub fn subscribe(&self) -> SubjectBoxStream<T> {
        let mut state = self.state.lock();
        let (tx, rx) = async_channel::unbounded();

        if let Some(item) = &state.latest {
            // The receiver is held locally, so the unbounded send cannot fail
            let _ = tx.try_send(item.clone());
        }

        if state.closed {
            // Terminated: the replayed item (if any) drains, then the stream ends
            tx.close();
        } else {
            state.senders.push(tx);
        }

        Box::pin(rx)
    }

    /// Send an item to all active subscribers and cache it for late ones.
    ///
    /// Sending an `Error` item terminates the subject: the error is cached as
    /// the terminal item and all subscriber streams end after delivering it.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn send(&self, item: StreamItem<T>) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let terminal = item.is_error();
        state.latest = Some(item.clone());

        let mut next_senders = Vec::with_capacity(state.senders.len());
        for tx in state.senders.drain(..) {
            if tx.try_send(item.clone()).is_ok() {
                next_senders.push(tx);
            }
        }

        if terminal {
            // Dropping the senders ends each subscriber stream once the
            // already-queued error item has been delivered
            state.closed = true;
        } else {
            state.senders = next_senders;
        }

        Ok(())
    }

    /// Send a value to all active subscribers.
    ///
    /// This is a convenience wrapper around `send(StreamItem::Value(value))`.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(StreamItem::Value(value))
    }

    /// Send a stream error to all subscribers and terminate the subject.
    ///
    /// The error becomes the cached terminal item, so subscribers attaching
    /// after the failure still observe it.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn error(&self, err: FlowError) -> Result<(), SubjectError> {
        self.send(StreamItem::Error(err))
    }

    /// Closes the subject, completing all subscriber streams.
    ///
    /// The cached last value is retained and still replayed to late
    /// subscribers. Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has terminated (closed or errored).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently active subscribers.
    ///
    /// Note: This count is updated lazily. Dropped subscribers are removed
    /// on the next `send()` call, not immediately when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }

    /// Returns a clone of the cached last item, if any.
    #[must_use]
    pub fn latest(&self) -> Option<StreamItem<T>> {
        self.state.lock().latest.clone()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ReplaySubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for ReplaySubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
