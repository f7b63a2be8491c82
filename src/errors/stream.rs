// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::HasherError;

/// Errors from reading, transforming or writing a document stream.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode document stream: {0}")]
    Decode(#[source] serde_yaml::Error),

    #[error("failed to encode document stream: {0}")]
    Encode(#[source] serde_yaml::Error),

    /// A ResourceList whose `items` field is not a sequence.
    #[error("ResourceList 'items' must be a sequence")]
    InvalidItems,

    #[error(transparent)]
    Transform(#[from] HasherError),
}
