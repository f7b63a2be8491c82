// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for per-document transform decisions.
//!
//! This module contains message types for logging events related to:
//! * Documents skipped by the kind or opt-in gates
//! * Documents renamed with a content hash suffix
//! * Documents that failed extraction or serialization

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Document left untouched by the transform.
///
/// # Log Level
/// `debug!` - Routine decision, only interesting when diagnosing
///
/// # Example
/// ```
/// use job_hasher::observability::messages::hasher::DocumentSkipped;
///
/// let msg = DocumentSkipped {
///     name: "build",
///     kind: Some("Deployment"),
///     reason: "kind is not 'Job'",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct DocumentSkipped<'a> {
    pub name: &'a str,
    pub kind: Option<&'a str>,
    pub reason: &'a str,
}

impl Display for DocumentSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping document '{}' (kind={}): {}",
            self.name,
            self.kind.unwrap_or("<none>"),
            self.reason
        )
    }
}

impl StructuredLog for DocumentSkipped<'_> {
    fn log(&self) {
        tracing::debug!(
            name = self.name,
            kind = self.kind.unwrap_or_default(),
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "document_skipped",
            span_name = name,
            document = self.name,
            reason = self.reason,
        )
    }
}

/// Document renamed with a content hash suffix.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use job_hasher::observability::messages::hasher::DocumentRenamed;
///
/// let msg = DocumentRenamed {
///     from: "build",
///     to: "build-ae2690ffaf",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct DocumentRenamed<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

impl Display for DocumentRenamed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Renamed '{}' to '{}'", self.from, self.to)
    }
}

impl StructuredLog for DocumentRenamed<'_> {
    fn log(&self) {
        tracing::info!(from = self.from, to = self.to, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "document_renamed",
            span_name = name,
            from = self.from,
            to = self.to,
        )
    }
}

/// Opt-in annotation present but not a boolean literal.
///
/// # Log Level
/// `warn!` - Treated as opted out, but likely a typo worth surfacing
///
/// # Example
/// ```
/// use job_hasher::observability::messages::hasher::InvalidOptInAnnotation;
///
/// let msg = InvalidOptInAnnotation {
///     name: "build",
///     annotation: "job-hasher",
///     value: "yes",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct InvalidOptInAnnotation<'a> {
    pub name: &'a str,
    pub annotation: &'a str,
    pub value: &'a str,
}

impl Display for InvalidOptInAnnotation<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Document '{}' has non-boolean '{}' annotation '{}' - not hashing",
            self.name, self.annotation, self.value
        )
    }
}

impl StructuredLog for InvalidOptInAnnotation<'_> {
    fn log(&self) {
        tracing::warn!(
            name = self.name,
            annotation = self.annotation,
            value = self.value,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "invalid_opt_in",
            span_name = name,
            document = self.name,
            annotation = self.annotation,
        )
    }
}

/// Hashing an opted-in document failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use job_hasher::observability::messages::hasher::HashingFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "field 'spec' not found");
/// let msg = HashingFailed {
///     name: "build",
///     field: "spec",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct HashingFailed<'a> {
    pub name: &'a str,
    pub field: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for HashingFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to hash '{}' of document '{}': {}",
            self.field, self.name, self.error
        )
    }
}

impl StructuredLog for HashingFailed<'_> {
    fn log(&self) {
        tracing::error!(
            name = self.name,
            field = self.field,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "hashing_failed",
            span_name = name,
            document = self.name,
            field = self.field,
        )
    }
}
