// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Two-input combine_latest operator.

use futures::future::ready;
use futures::stream::{self, Stream, StreamExt};
use shopflow_core::StreamItem;

enum Side<L, R> {
    Left(StreamItem<L>),
    Right(StreamItem<R>),
}

struct LatestPair<L, R> {
    left: Option<L>,
    right: Option<R>,
    terminated: bool,
}

impl<L: Clone, R: Clone> LatestPair<L, R> {
    const fn new() -> Self {
        Self {
            left: None,
            right: None,
            terminated: false,
        }
    }

    fn emit(&self) -> Option<StreamItem<(L, R)>> {
        match (&self.left, &self.right) {
            (Some(l), Some(r)) => Some(StreamItem::Value((l.clone(), r.clone()))),
            _ => None,
        }
    }
}

/// Combines two streams with combine-latest semantics.
///
/// The combined stream tracks the most recent value of each input. Nothing is
/// emitted until both inputs have produced at least one value; from then on,
/// every update to either input emits the latest pair.
///
/// # Behavior
///
/// - **Values**: The updated side replaces its cached value; a pair is emitted
///   once both sides are known.
/// - **Errors**: The first `Error` from either side is forwarded immediately;
///   nothing is emitted after it.
/// - **Completion**: The combined stream ends when both inputs have ended.
///
/// # Examples
///
/// ```
/// use futures::StreamExt;
/// use shopflow_core::{ReplaySubject, StreamItem};
/// use shopflow_stream::combine_latest;
///
/// # #[tokio::main]
/// # async fn main() {
/// let left = ReplaySubject::<i32>::new();
/// let right = ReplaySubject::<&str>::new();
///
/// let mut combined = Box::pin(combine_latest(left.subscribe(), right.subscribe()));
///
/// left.next(1).unwrap();
/// right.next("a").unwrap();
///
/// assert_eq!(combined.next().await, Some(StreamItem::Value((1, "a"))));
/// # }
/// ```
pub fn combine_latest<L, R, SL, SR>(
    left: SL,
    right: SR,
) -> impl Stream<Item = StreamItem<(L, R)>> + Send
where
    L: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    SL: Stream<Item = StreamItem<L>> + Send + 'static,
    SR: Stream<Item = StreamItem<R>> + Send + 'static,
{
    stream::select(left.map(Side::Left), right.map(Side::Right))
        .scan(LatestPair::new(), |state, side| {
            if state.terminated {
                return ready(None);
            }
            let out = match side {
                Side::Left(StreamItem::Value(v)) => {
                    state.left = Some(v);
                    state.emit()
                }
                Side::Right(StreamItem::Value(v)) => {
                    state.right = Some(v);
                    state.emit()
                }
                Side::Left(StreamItem::Error(e)) | Side::Right(StreamItem::Error(e)) => {
                    state.terminated = true;
                    Some(StreamItem::Error(e))
                }
            };
            ready(Some(out))
        })
        .filter_map(ready)
}
