// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for stream decoding and encoding.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Input stream decoded into documents.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use job_hasher::observability::messages::stream::StreamDecoded;
///
/// let msg = StreamDecoded {
///     format: "ResourceList",
///     document_count: 3,
///     input_size: 512,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct StreamDecoded<'a> {
    pub format: &'a str,
    pub document_count: usize,
    pub input_size: usize,
}

impl Display for StreamDecoded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Decoded {} documents from {} input ({} bytes)",
            self.document_count, self.format, self.input_size
        )
    }
}

impl StructuredLog for StreamDecoded<'_> {
    fn log(&self) {
        tracing::debug!(
            format = self.format,
            document_count = self.document_count,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stream_decode",
            span_name = name,
            format = self.format,
            document_count = self.document_count,
        )
    }
}

/// Documents encoded back to the output stream.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct StreamEncoded<'a> {
    pub format: &'a str,
    pub document_count: usize,
    pub output_size: usize,
}

impl Display for StreamEncoded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Encoded {} documents as {} ({} bytes)",
            self.document_count, self.format, self.output_size
        )
    }
}

impl StructuredLog for StreamEncoded<'_> {
    fn log(&self) {
        tracing::debug!(
            format = self.format,
            document_count = self.document_count,
            output_size = self.output_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stream_encode",
            span_name = name,
            format = self.format,
            document_count = self.document_count,
        )
    }
}
