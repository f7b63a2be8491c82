// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use crate::document::Document;
use crate::errors::{HasherError, StreamError};
use crate::observability::messages::{pipeline::*, StructuredLog};
use crate::stream::DocumentStream;
use crate::traits::{Outcome, Transformer};

/// Per-document outcomes of a completed pass, in sequence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineReport {
    pub outcomes: Vec<Outcome>,
}

impl PipelineReport {
    pub fn renamed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_renamed()).count()
    }
}

/// Run `transformer` over `documents` one at a time, in order.
///
/// The pass is fail-fast: the first error is returned as-is and no later
/// document is visited. Documents before the failing one have already been
/// mutated in place, so callers must discard the sequence on error.
pub fn run_pipeline<T, D>(transformer: &T, documents: &mut [D]) -> Result<PipelineReport, HasherError>
where
    T: Transformer,
    D: Document,
{
    let document_count = documents.len();
    let start_msg = PipelineStarted {
        transformer: transformer.name(),
        document_count,
    };
    let span = start_msg.span(transformer.name());
    let _guard = span.enter();
    start_msg.log();

    let start_time = Instant::now();
    let mut report = PipelineReport::default();

    for (index, document) in documents.iter_mut().enumerate() {
        match transformer.transform(document) {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(error) => {
                PipelineAborted {
                    index,
                    document_count,
                    error: &error,
                }
                .log();
                return Err(error);
            }
        }
    }

    PipelineCompleted {
        document_count,
        renamed_count: report.renamed_count(),
        duration: start_time.elapsed(),
    }
    .log();

    Ok(report)
}

/// Decode `input`, run `transformer` over every item and encode the result.
///
/// Nothing is returned for a stream containing a failing document.
pub fn run_stream<T: Transformer>(transformer: &T, input: &str) -> Result<String, StreamError> {
    let mut stream = DocumentStream::decode(input)?;
    run_pipeline(transformer, stream.items_mut())?;
    stream.encode()
}
