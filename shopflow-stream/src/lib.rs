// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Stream operators for the shopflow reactive catalog.
//!
//! This crate provides the small operator set the catalog pipeline is built
//! from, working over [`StreamItem`](shopflow_core::StreamItem) streams:
//!
//! - **[`combine_latest()`]**: joins two streams with combine-latest
//!   semantics; it emits once both sides have produced a value, then once per
//!   update.
//! - **[`map_values`](FlowStreamExt::map_values)** / **[`tap_values`](FlowStreamExt::tap_values)**:
//!   value transformation and side-effect observation with error passthrough.
//! - **[`SharedReplay`]**: the shared cache wrapper, a cold stream factory
//!   run at most once, multicast to all subscribers, with the last item
//!   replayed to late ones.
//!
//! Operators are available both as free functions and in method position via
//! [`FlowStreamExt`].

pub mod combine_latest;
pub mod ext;
pub mod map_values;
pub mod share_replay;
pub mod tap;

pub use self::combine_latest::combine_latest;
pub use self::ext::FlowStreamExt;
pub use self::map_values::map_values;
pub use self::share_replay::{BoxFlowStream, SharedReplay};
pub use self::tap::tap;
