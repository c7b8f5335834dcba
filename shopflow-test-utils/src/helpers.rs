// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use shopflow_core::{FlowError, StreamItem};
use std::time::Duration;
use tokio::time::sleep;

/// Asserts that `stream` stays silent for `timeout_ms` milliseconds.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Asserts that `stream` has ended.
pub async fn assert_stream_ended<S, T>(stream: &mut S)
where
    S: Stream<Item = T> + Unpin,
{
    assert!(stream.next().await.is_none(), "expected end of stream");
}

/// Awaits the next item and returns its value, panicking on error or end of
/// stream.
pub async fn next_value<S, T>(stream: &mut S) -> T
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match stream.next().await {
        Some(StreamItem::Value(v)) => v,
        Some(StreamItem::Error(e)) => panic!("expected value, got error: {e}"),
        None => panic!("expected value, stream ended"),
    }
}

/// Awaits the next item and returns its error, panicking on a value or end of
/// stream.
pub async fn next_error<S, T>(stream: &mut S) -> FlowError
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match stream.next().await {
        Some(StreamItem::Error(e)) => e,
        Some(StreamItem::Value(_)) => panic!("expected error, got value"),
        None => panic!("expected error, stream ended"),
    }
}
