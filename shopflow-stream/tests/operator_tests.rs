use parking_lot::Mutex;
use shopflow_core::FlowError;
use shopflow_stream::FlowStreamExt;
use shopflow_test_utils::{item_channel, next_error, next_value, push, push_error};
use std::sync::Arc;

#[tokio::test]
async fn map_values_transforms_and_passes_errors_through() {
    let (tx, rx) = item_channel::<i32>();
    let mut mapped = Box::pin(rx.map_values(|x| x * 2));

    push(21, &tx);
    assert_eq!(next_value(&mut mapped).await, 42);

    push_error(FlowError::stream_error("boom"), &tx);
    let err = next_error(&mut mapped).await;
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn tap_values_observes_without_modifying() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let (tx, rx) = item_channel::<i32>();
    let mut tapped = Box::pin(rx.tap_values(move |x| sink.lock().push(*x)));

    push(1, &tx);
    push(2, &tx);
    assert_eq!(next_value(&mut tapped).await, 1);
    assert_eq!(next_value(&mut tapped).await, 2);
    assert_eq!(*seen.lock(), vec![1, 2]);
}

#[tokio::test]
async fn tap_values_skips_errors() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let (tx, rx) = item_channel::<i32>();
    let mut tapped = Box::pin(rx.tap_values(move |x| sink.lock().push(*x)));

    push_error(FlowError::stream_error("boom"), &tx);
    let _ = next_error(&mut tapped).await;

    assert!(seen.lock().is_empty());
}

#[tokio::test]
async fn operators_chain_in_method_position() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let (left_tx, left_rx) = item_channel::<i32>();
    let (right_tx, right_rx) = item_channel::<i32>();

    let mut chained = Box::pin(
        left_rx
            .combine_latest(right_rx)
            .map_values(|(l, r)| l + r)
            .tap_values(move |sum| sink.lock().push(*sum)),
    );

    push(1, &left_tx);
    push(2, &right_tx);
    assert_eq!(next_value(&mut chained).await, 3);

    push(10, &left_tx);
    assert_eq!(next_value(&mut chained).await, 12);

    assert_eq!(*seen.lock(), vec![3, 12]);
}
