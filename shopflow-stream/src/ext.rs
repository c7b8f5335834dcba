// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait exposing the operators in method position.

use crate::{combine_latest, map_values, tap};
use futures::stream::Stream;
use shopflow_core::StreamItem;

/// Chaining access to the shopflow operators for any `StreamItem` stream.
///
/// ```
/// use futures::StreamExt;
/// use shopflow_core::{ReplaySubject, StreamItem};
/// use shopflow_stream::FlowStreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let numbers = ReplaySubject::<i32>::new();
/// let mut doubled = Box::pin(numbers.subscribe().map_values(|x| x * 2));
///
/// numbers.next(21).unwrap();
/// assert_eq!(doubled.next().await, Some(StreamItem::Value(42)));
/// # }
/// ```
pub trait FlowStreamExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone + Send + Sync + 'static,
{
    /// Combines this stream with `other` using combine-latest semantics.
    ///
    /// See [`combine_latest()`] for the full contract.
    fn combine_latest<U, S2>(
        self,
        other: S2,
    ) -> impl Stream<Item = StreamItem<(T, U)>> + Send + 'static
    where
        U: Clone + Send + Sync + 'static,
        S2: Stream<Item = StreamItem<U>> + Send + 'static,
        Self: Send + 'static;

    /// Transforms each value, passing errors through unchanged.
    fn map_values<U, F>(self, f: F) -> impl Stream<Item = StreamItem<U>> + Send + 'static
    where
        U: 'static,
        F: FnMut(T) -> U + Send + 'static,
        Self: Send + 'static;

    /// Invokes a side-effect closure on each value without modifying the
    /// stream. Errors pass through untapped.
    fn tap_values<F>(self, f: F) -> impl Stream<Item = StreamItem<T>> + Send + 'static
    where
        F: FnMut(&T) + Send + 'static,
        Self: Send + 'static;
}

impl<T, S> FlowStreamExt<T> for S
where
    T: Clone + Send + Sync + 'static,
    S: Stream<Item = StreamItem<T>> + Sized,
{
    fn combine_latest<U, S2>(
        self,
        other: S2,
    ) -> impl Stream<Item = StreamItem<(T, U)>> + Send + 'static
    where
        U: Clone + Send + Sync + 'static,
        S2: Stream<Item = StreamItem<U>> + Send + 'static,
        Self: Send + 'static,
    {
        combine_latest(self, other)
    }

    fn map_values<U, F>(self, f: F) -> impl Stream<Item = StreamItem<U>> + Send + 'static
    where
        U: 'static,
        F: FnMut(T) -> U + Send + 'static,
        Self: Send + 'static,
    {
        map_values(self, f)
    }

    fn tap_values<F>(self, f: F) -> impl Stream<Item = StreamItem<T>> + Send + 'static
    where
        F: FnMut(&T) + Send + 'static,
        Self: Send + 'static,
    {
        tap(self, f)
    }
}
