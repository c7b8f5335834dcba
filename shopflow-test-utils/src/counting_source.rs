// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use shopflow_catalog::{FetchError, Product, ProductSource};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stub transport that counts fetches and returns a canned outcome.
///
/// The call counter is what cache-once assertions are built on: however many
/// streams are subscribed, however late, the count must stay at one.
pub struct CountingSource {
    outcome: Result<Vec<Product>, FetchError>,
    calls: AtomicUsize,
}

impl CountingSource {
    /// A source that successfully returns `products` on every fetch.
    pub fn ok(products: Vec<Product>) -> Self {
        Self {
            outcome: Ok(products),
            calls: AtomicUsize::new(0),
        }
    }

    /// A source whose fetch fails with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `fetch_products` has been called.
    pub fn fetch_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductSource for CountingSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
