// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the shopflow stream pipeline.
//!
//! A single root [`FlowError`] travels through streams as the payload of
//! [`StreamItem::Error`](crate::StreamItem::Error). Failures raised at an I/O
//! boundary are normalized into a descriptive context string before they enter
//! a stream, so every downstream stage observes the same message.

/// Root error type for all shopflow stream operations.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Stream processing encountered an error.
    ///
    /// Carries the normalized, human-readable description of the failure.
    #[error("Stream processing error: {context}")]
    StreamProcessing {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code.
    ///
    /// This wraps errors produced by user-provided functions and callbacks,
    /// allowing them to be propagated through the shopflow error system.
    #[error("User error: {0}")]
    User(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl FlowError {
    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessing {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::User(Box::new(error))
    }
}

impl Clone for FlowError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessing { context } => Self::StreamProcessing {
                context: context.clone(),
            },
            // The boxed error cannot be cloned, so degrade it to its message
            Self::User(e) => Self::StreamProcessing {
                context: format!("User error: {}", e),
            },
        }
    }
}

/// Specialized Result type for shopflow operations.
pub type Result<T> = std::result::Result<T, FlowError>;
