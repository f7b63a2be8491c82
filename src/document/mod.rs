// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured configuration documents.
//!
//! Transformers never touch a concrete tree. They work against the
//! [`Document`] capability set, and [`YamlDocument`] provides it for
//! documents decoded with `serde_yaml`.

pub mod canonical;
mod yaml;

pub use canonical::canonical_json;
pub use yaml::YamlDocument;

use crate::errors::LookupError;
use std::collections::BTreeMap;

/// Capabilities a document must expose to be transformed.
pub trait Document {
    /// Sub-structure handle returned by [`Document::lookup`].
    type Node;

    /// Failure to encode a sub-structure in [`Document::canonical_bytes`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// The `kind` discriminator, if present and a string.
    fn kind(&self) -> Option<&str>;

    /// All string-valued annotations from `metadata.annotations`.
    fn annotations(&self) -> BTreeMap<String, String>;

    /// A single annotation value.
    fn annotation(&self, key: &str) -> Option<String> {
        self.annotations().remove(key)
    }

    /// The `metadata.name` field, or an empty string when absent.
    fn name(&self) -> String;

    /// Replace `metadata.name` in place.
    fn set_name(&mut self, name: &str);

    /// Resolve a dotted field path such as `spec` or `spec.template`.
    fn lookup(&self, path: &str) -> Result<&Self::Node, LookupError>;

    /// Encode a sub-structure to its canonical byte form.
    ///
    /// Equal content must produce equal bytes regardless of key order.
    fn canonical_bytes(node: &Self::Node) -> Result<Vec<u8>, Self::Error>;

    /// Full textual rendering of the document, used in diagnostics.
    fn dump(&self) -> String;
}
