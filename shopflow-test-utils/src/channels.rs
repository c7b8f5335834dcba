// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use shopflow_core::{FlowError, StreamItem};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio_stream::wrappers::UnboundedReceiverStream;

/// An unbounded channel whose receiving half is a `StreamItem` stream,
/// for driving operators from test code.
pub fn item_channel<T>() -> (
    UnboundedSender<StreamItem<T>>,
    UnboundedReceiverStream<StreamItem<T>>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}

/// Sends a value into an item channel.
pub fn push<T>(value: T, sender: &UnboundedSender<StreamItem<T>>) {
    sender
        .send(StreamItem::Value(value))
        .expect("channel receiver dropped");
}

/// Sends an error into an item channel.
pub fn push_error<T>(error: FlowError, sender: &UnboundedSender<StreamItem<T>>) {
    sender
        .send(StreamItem::Error(error))
        .expect("channel receiver dropped");
}
