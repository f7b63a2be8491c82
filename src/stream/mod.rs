// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Decoding and encoding of the document stream a transform runs over.
//!
//! Two input shapes are accepted and written back in the same shape:
//!
//! * a KRM `ResourceList` (`kind: ResourceList` with an `items` sequence),
//!   as handed to a config function by kustomize or kpt
//! * a plain multi-document YAML stream separated by `---`

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::document::YamlDocument;
use crate::errors::StreamError;
use crate::observability::messages::{stream::*, StructuredLog};

pub const RESOURCE_LIST_KIND: &str = "ResourceList";
const ITEMS: &str = "items";
const DOCUMENT_SEPARATOR: &str = "---\n";

/// A decoded input stream, remembering the shape it arrived in.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentStream {
    /// Items of a ResourceList; `envelope` is the original top-level mapping
    /// (apiVersion, kind, functionConfig, results) with `items` replaced on
    /// encode, so field order survives.
    ResourceList {
        envelope: Mapping,
        items: Vec<YamlDocument>,
    },
    /// Documents of a multi-document YAML stream, in source order.
    Documents(Vec<YamlDocument>),
}

impl DocumentStream {
    /// Decode `input`, detecting whether it is a ResourceList.
    ///
    /// Empty documents (for example from a trailing `---`) are dropped.
    pub fn decode(input: &str) -> Result<Self, StreamError> {
        let mut values = Vec::new();
        for document in serde_yaml::Deserializer::from_str(input) {
            let value = Value::deserialize(document).map_err(StreamError::Decode)?;
            if !value.is_null() {
                values.push(value);
            }
        }

        let stream = match values.pop() {
            Some(Value::Mapping(root)) if values.is_empty() && is_resource_list(&root) => {
                let items = match root.get(ITEMS) {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Sequence(items)) => {
                        items.iter().cloned().map(YamlDocument::new).collect()
                    }
                    Some(_) => return Err(StreamError::InvalidItems),
                };
                DocumentStream::ResourceList {
                    envelope: root,
                    items,
                }
            }
            last => {
                values.extend(last);
                DocumentStream::Documents(values.into_iter().map(YamlDocument::new).collect())
            }
        };

        StreamDecoded {
            format: stream.format(),
            document_count: stream.items().len(),
            input_size: input.len(),
        }
        .log();

        Ok(stream)
    }

    /// Encode the stream back to text in the shape it was decoded from.
    pub fn encode(&self) -> Result<String, StreamError> {
        let output = match self {
            DocumentStream::ResourceList { envelope, items } => {
                let mut root = envelope.clone();
                let items = items
                    .iter()
                    .map(|item| item.as_value().clone())
                    .collect::<Vec<_>>();
                root.insert(Value::from(ITEMS), Value::Sequence(items));
                serde_yaml::to_string(&root).map_err(StreamError::Encode)?
            }
            DocumentStream::Documents(documents) => documents
                .iter()
                .map(serde_yaml::to_string)
                .collect::<Result<Vec<_>, _>>()
                .map_err(StreamError::Encode)?
                .join(DOCUMENT_SEPARATOR),
        };

        StreamEncoded {
            format: self.format(),
            document_count: self.items().len(),
            output_size: output.len(),
        }
        .log();

        Ok(output)
    }

    pub fn items(&self) -> &[YamlDocument] {
        match self {
            DocumentStream::ResourceList { items, .. } => items,
            DocumentStream::Documents(documents) => documents,
        }
    }

    pub fn items_mut(&mut self) -> &mut [YamlDocument] {
        match self {
            DocumentStream::ResourceList { items, .. } => items,
            DocumentStream::Documents(documents) => documents,
        }
    }

    pub fn format(&self) -> &'static str {
        match self {
            DocumentStream::ResourceList { .. } => RESOURCE_LIST_KIND,
            DocumentStream::Documents(_) => "multi-document YAML",
        }
    }
}

fn is_resource_list(root: &Mapping) -> bool {
    root.get("kind").and_then(Value::as_str) == Some(RESOURCE_LIST_KIND)
}
