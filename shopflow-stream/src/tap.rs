// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tap operator for side-effect observation without modifying the stream.

use futures::stream::{Stream, StreamExt};
use shopflow_core::StreamItem;

/// Invokes a side-effect function for each value without modifying the stream.
///
/// This operator is useful for debugging, logging, or metrics collection
/// without affecting the stream's data flow.
///
/// # Behavior
///
/// - **Values**: Function `f` is called with a reference to the value, then
///   the value passes through unchanged
/// - **Errors**: Pass through without calling `f`
pub fn tap<S, T, F>(stream: S, mut f: F) -> impl Stream<Item = StreamItem<T>>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(&T),
{
    stream.map(move |item| {
        if let StreamItem::Value(value) = &item {
            f(value);
        }
        item
    })
}
