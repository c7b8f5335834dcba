// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cached reference-data feeds.
//!
//! Category and supplier collections come from peer providers with the same
//! contract as the product stream: fetch once, replay to all subscribers,
//! pass failures through. [`ReferenceFeed`] packages that contract around a
//! single asynchronous fetch.

use crate::fetch::{normalize, FetchError};
use futures::stream;
use shopflow_core::{StreamItem, SubjectBoxStream};
use shopflow_stream::SharedReplay;
use std::future::Future;

/// A cached, multicast feed of one reference collection.
///
/// The fetch runs at most once, triggered by the first subscription anywhere
/// downstream; its result (or normalized failure) is replayed to every later
/// subscriber.
#[derive(Clone)]
pub struct ReferenceFeed<T: Clone + Send + Sync + 'static> {
    shared: SharedReplay<Vec<T>>,
}

impl<T: Clone + Send + Sync + 'static> ReferenceFeed<T> {
    /// Wraps a cold fetch in the shared cache contract.
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Vec<T>, FetchError>> + Send + 'static,
    {
        let shared = SharedReplay::new(move || {
            stream::once(async move { StreamItem::from(fetch().await.map_err(normalize)) })
        });
        Self { shared }
    }

    /// Subscribe to the collection.
    pub fn stream(&self) -> SubjectBoxStream<Vec<T>> {
        self.shared.subscribe()
    }
}
