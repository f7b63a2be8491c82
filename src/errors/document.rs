// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised when a field path does not resolve on a document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// The final path segment is missing from its parent mapping
    #[error("field '{path}' not found")]
    FieldNotFound { path: String },

    /// An intermediate node is not a mapping, so the path cannot descend
    #[error("cannot look up '{segment}' in '{path}': node is not a mapping")]
    NotAMapping { path: String, segment: String },
}

/// Errors surfaced by a transformer acting on a single document.
///
/// Both variants carry a full textual dump of the offending document so the
/// failure can be diagnosed from the pipeline's error output alone.
#[derive(Error, Debug)]
pub enum HasherError {
    /// The hashed sub-structure could not be located on an opted-in document.
    #[error("{source}: {document}")]
    Extraction {
        #[source]
        source: LookupError,
        document: String,
    },

    /// The hashed sub-structure could not be encoded to canonical bytes.
    #[error("failed to marshal spec for hashing: {source}: {document}")]
    Serialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        document: String,
    },
}

/// Errors raised while encoding a sub-structure to canonical JSON.
#[derive(Error, Debug)]
pub enum CanonicalError {
    /// Only mappings, sequences and null can be encoded at the top level
    #[error("cannot unmarshal {0} into a JSON object")]
    NotACollection(&'static str),

    /// JSON object keys must be strings
    #[error("mapping key {0} is not a string")]
    NonStringKey(String),

    /// NaN and infinities have no JSON representation
    #[error("unsupported value: {0}")]
    NonFiniteNumber(f64),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
