// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod behavior_subject;
pub mod error;
pub mod replay_subject;
pub mod stream_item;
pub mod subject_error;

pub use self::behavior_subject::BehaviorSubject;
pub use self::error::{FlowError, Result};
pub use self::replay_subject::{ReplaySubject, SubjectBoxStream};
pub use self::stream_item::StreamItem;
pub use self::subject_error::SubjectError;
