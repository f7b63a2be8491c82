// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for a pass over a document sequence.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pass over a document sequence started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineStarted<'a> {
    pub transformer: &'a str,
    pub document_count: usize,
}

impl Display for PipelineStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running '{}' over {} documents",
            self.transformer, self.document_count
        )
    }
}

impl StructuredLog for PipelineStarted<'_> {
    fn log(&self) {
        tracing::info!(
            transformer = self.transformer,
            document_count = self.document_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline",
            span_name = name,
            transformer = self.transformer,
            document_count = self.document_count,
        )
    }
}

/// Pass completed without error.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineCompleted {
    pub document_count: usize,
    pub renamed_count: usize,
    pub duration: std::time::Duration,
}

impl Display for PipelineCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processed {} documents, renamed {}, duration={:?}",
            self.document_count, self.renamed_count, self.duration
        )
    }
}

impl StructuredLog for PipelineCompleted {
    fn log(&self) {
        tracing::info!(
            document_count = self.document_count,
            renamed_count = self.renamed_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_completed",
            span_name = name,
            document_count = self.document_count,
            renamed_count = self.renamed_count,
        )
    }
}

/// Pass stopped at the first failing document.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PipelineAborted<'a> {
    pub index: usize,
    pub document_count: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for PipelineAborted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Aborting at document {} of {}: {}",
            self.index + 1,
            self.document_count,
            self.error
        )
    }
}

impl StructuredLog for PipelineAborted<'_> {
    fn log(&self) {
        tracing::error!(
            index = self.index,
            document_count = self.document_count,
            skipped_remaining = self.document_count - self.index - 1,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "pipeline_aborted",
            span_name = name,
            index = self.index,
            document_count = self.document_count,
        )
    }
}
