// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Test utilities and fixtures shared across the shopflow workspace.

pub mod channels;
pub mod counting_source;
pub mod fixtures;
pub mod helpers;

pub use self::channels::{item_channel, push, push_error};
pub use self::counting_source::CountingSource;
pub use self::helpers::{assert_no_element_emitted, assert_stream_ended, next_error, next_value};
