// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared replay wrapper for cold streams.
//!
//! A [`SharedReplay`] turns a cold stream factory into a hot, multicast,
//! replay-on-late-subscribe source. The factory runs at most once across the
//! wrapper's lifetime: the first subscription activates it, and every
//! subscriber, concurrent or late, observes the same sequence, with the most
//! recent item replayed on attach.
//!
//! ## Characteristics
//!
//! - **Lazy**: Nothing runs until the first `subscribe()`.
//! - **At most one activation**: Later subscribers share the one source run;
//!   subscribers attaching after completion receive the cached last item
//!   without re-running the factory.
//! - **Subscriber-independent lifetime**: The source run and its cache survive
//!   all subscribers detaching; they are torn down only when the last
//!   `SharedReplay` handle is dropped.
//! - **Terminal failure**: An `Error` item from the source terminates the
//!   shared stream and poisons the wrapper permanently: the error is cached
//!   and replayed to every future subscriber, and the factory is never re-run.
//!   Recovery, if desired, belongs to the layer owning the wrapper.
//!
//! ## Comparison with ReplaySubject
//!
//! | Type | Source | Push API |
//! |------|--------|----------|
//! | [`ReplaySubject`](shopflow_core::ReplaySubject) | External (you call `next()`) | Yes |
//! | [`SharedReplay`] | Cold stream factory | No |
//!
//! Both are subscription factories with the same `subscribe()` pattern.

use futures::stream::{Stream, StreamExt};
use parking_lot::Mutex;
use shopflow_core::{ReplaySubject, StreamItem, SubjectBoxStream};
use std::pin::Pin;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Type alias for the boxed source stream produced by a factory.
pub type BoxFlowStream<T> = Pin<Box<dyn Stream<Item = StreamItem<T>> + Send + 'static>>;

type Factory<T> = Box<dyn FnOnce() -> BoxFlowStream<T> + Send>;

/// Aborts the forwarding task when the owning state is dropped.
struct ForwardGuard(JoinHandle<()>);

impl Drop for ForwardGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

struct SharedState<T: Clone + Send + Sync + 'static> {
    factory: Option<Factory<T>>,
    subject: ReplaySubject<T>,
    task: Option<ForwardGuard>,
}

impl<T: Clone + Send + Sync + 'static> Drop for SharedState<T> {
    fn drop(&mut self) {
        self.subject.close();
    }
}

/// A shared stream that runs its cold source at most once and replays the
/// most recent item to late subscribers.
///
/// Handles are cheap to clone; all clones share the activation, the cache and
/// the forwarding task. See the [module documentation](self) for the caching
/// and failure semantics.
pub struct SharedReplay<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<SharedState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> SharedReplay<T> {
    /// Creates a new wrapper around a cold stream factory.
    ///
    /// The factory is not invoked here. It runs inside the first call to
    /// [`subscribe`](Self::subscribe), exactly once.
    pub fn new<S, F>(factory: F) -> Self
    where
        F: FnOnce() -> S + Send + 'static,
        S: Stream<Item = StreamItem<T>> + Send + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(SharedState {
                factory: Some(Box::new(move || {
                    let source: BoxFlowStream<T> = Box::pin(factory());
                    source
                })),
                subject: ReplaySubject::new(),
                task: None,
            })),
        }
    }

    /// Subscribe to the shared source.
    ///
    /// The first subscription builds the source stream and spawns the
    /// forwarding task; every subscription returns an independent stream fed
    /// from the shared run, starting with the cached last item if one exists.
    pub fn subscribe(&self) -> SubjectBoxStream<T> {
        let mut state = self.state.lock();

        if let Some(factory) = state.factory.take() {
            let subject = state.subject.clone();
            let mut source = factory();
            let handle = tokio::spawn(async move {
                while let Some(item) = source.next().await {
                    let terminal = item.is_error();
                    if subject.send(item).is_err() || terminal {
                        break;
                    }
                }
                // Source exhausted or errored; the cached item stays replayable
                subject.close();
            });
            state.task = Some(ForwardGuard(handle));
        }

        state.subject.subscribe()
    }

    /// Returns `true` if the shared source has completed or errored.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().subject.is_closed()
    }

    /// Returns the number of currently active subscribers.
    ///
    /// Note: This count is updated lazily. Dropped subscribers are removed
    /// on the next emission, not immediately when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subject.subscriber_count()
    }

    /// Returns a clone of the cached last item, if the source has emitted one.
    #[must_use]
    pub fn latest(&self) -> Option<StreamItem<T>> {
        self.state.lock().subject.latest()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for SharedReplay<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
