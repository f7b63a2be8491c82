// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] for emitting it as a `tracing` event with typed fields.
//!
//! * `hasher` - Per-document transform decisions
//! * `pipeline` - Pass lifecycle over a document sequence
//! * `stream` - Stream decoding and encoding events

use tracing::Span;

pub mod hasher;
pub mod pipeline;
pub mod stream;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
