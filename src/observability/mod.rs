// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the job hasher. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep structured fields and human-readable text in one place
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::hasher` - Per-document transform decisions
//! * `messages::pipeline` - Pass lifecycle over a document sequence
//! * `messages::stream` - Stream decoding and encoding events
//!
//! # Usage
//!
//! ```rust
//! use job_hasher::observability::messages::hasher::DocumentRenamed;
//! use job_hasher::observability::messages::StructuredLog;
//!
//! DocumentRenamed {
//!     from: "build",
//!     to: "build-ae2690ffaf",
//! }
//! .log();
//! ```

pub mod messages;
