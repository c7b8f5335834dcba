// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! State cell exposed as a replaying stream.
//!
//! A [`BehaviorSubject`] is a [`ReplaySubject`] that always holds a current
//! value: it is constructed with an initial one, every `set` replaces it, and
//! every subscriber immediately observes the value current at subscribe time.
//!
//! This is the single-writer, multi-reader cell backing externally-driven
//! state such as the current selection: writes go through [`set`], reads go
//! through [`subscribe`] (reactive) or [`value`] (snapshot).
//!
//! [`set`]: BehaviorSubject::set
//! [`subscribe`]: BehaviorSubject::subscribe
//! [`value`]: BehaviorSubject::value

use crate::{ReplaySubject, StreamItem, SubjectBoxStream};
use parking_lot::Mutex;
use std::sync::Arc;

/// A mutable cell whose current value is broadcast to subscribers.
///
/// Unlike a bare [`ReplaySubject`], a `BehaviorSubject` can never be empty or
/// terminated: there is always a value to replay, and the only transition is
/// [`set`](Self::set).
pub struct BehaviorSubject<T: Clone + Send + Sync + 'static> {
    current: Arc<Mutex<T>>,
    inner: ReplaySubject<T>,
}

impl<T: Clone + Send + Sync + 'static> BehaviorSubject<T> {
    /// Creates a cell holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            current: Arc::new(Mutex::new(initial.clone())),
            inner: ReplaySubject::with_latest(StreamItem::Value(initial)),
        }
    }

    /// Replaces the current value and broadcasts it to all subscribers.
    pub fn set(&self, value: T) {
        *self.current.lock() = value.clone();
        // The subject's lifecycle is owned here and never terminated, so the
        // send cannot fail
        let _ = self.inner.next(value);
    }

    /// Returns a snapshot of the current value.
    #[must_use]
    pub fn value(&self) -> T {
        self.current.lock().clone()
    }

    /// Subscribe to the cell: the current value is delivered immediately,
    /// followed by every subsequent update.
    pub fn subscribe(&self) -> SubjectBoxStream<T> {
        self.inner.subscribe()
    }

    /// Returns the number of currently active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for BehaviorSubject<T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            inner: self.inner.clone(),
        }
    }
}
