// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transport seam and failure normalization.
//!
//! The catalog treats the HTTP layer as an opaque asynchronous fetch behind
//! [`ProductSource`]. Failures carry enough structure to distinguish a
//! transport-level problem from a server-reported one; [`normalize`] collapses
//! them into the single descriptive message that travels through the streams.

use crate::model::Product;
use async_trait::async_trait;
use shopflow_core::FlowError;

/// A failure reported by the transport layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    /// A client-side or network error occurred; no response reached the server.
    #[error("An error occurred: {0}")]
    Transport(String),

    /// The backend returned an unsuccessful response code; the body may
    /// contain clues as to what went wrong.
    #[error("Backend returned code {status}: {body}")]
    Server { status: u16, body: String },

    /// A raw message, passed through as-is.
    #[error("{0}")]
    Message(String),
}

/// The one operation the catalog needs from the transport layer.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the full product collection.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Normalizes a transport failure into a stream-level error.
///
/// The structured failure is logged at the point of origin; what propagates
/// downstream is a [`FlowError`] carrying the normalized human-readable
/// message, so every derived stage surfaces the same description.
pub fn normalize(err: FetchError) -> FlowError {
    tracing::error!(error = ?err, "catalog source failure");
    FlowError::stream_error(err.to_string())
}
