// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

use super::{canonical_json, Document};
use crate::errors::{CanonicalError, LookupError};

const KIND: &str = "kind";
const METADATA: &str = "metadata";
const NAME: &str = "name";
const ANNOTATIONS: &str = "annotations";

/// A document backed by a generic `serde_yaml` tree.
///
/// Mapping key order is preserved from the source text when the document is
/// written back. The canonical form used for hashing sorts keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YamlDocument(Value);

impl YamlDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a single YAML document from text.
    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text).map(Self)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    fn metadata(&self) -> Option<&Mapping> {
        self.0.get(METADATA).and_then(Value::as_mapping)
    }
}

impl From<Value> for YamlDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Textual form of a scalar, the way a string-typed accessor would see it.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

impl Document for YamlDocument {
    type Node = Value;
    type Error = CanonicalError;

    fn kind(&self) -> Option<&str> {
        self.0.get(KIND).and_then(Value::as_str)
    }

    fn annotations(&self) -> BTreeMap<String, String> {
        self.metadata()
            .and_then(|m| m.get(ANNOTATIONS))
            .and_then(Value::as_mapping)
            .map(|annotations| {
                annotations
                    .iter()
                    .filter_map(|(k, v)| Some((k.as_str()?.to_string(), scalar_text(v)?)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn annotation(&self, key: &str) -> Option<String> {
        self.metadata()?
            .get(ANNOTATIONS)?
            .as_mapping()?
            .get(key)
            .and_then(scalar_text)
    }

    fn name(&self) -> String {
        self.metadata()
            .and_then(|m| m.get(NAME))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    fn set_name(&mut self, name: &str) {
        if !self.0.is_mapping() {
            self.0 = Value::Mapping(Mapping::new());
        }
        let Value::Mapping(root) = &mut self.0 else {
            return;
        };

        let metadata = root
            .entry(Value::from(METADATA))
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        if !metadata.is_mapping() {
            *metadata = Value::Mapping(Mapping::new());
        }
        if let Value::Mapping(metadata) = metadata {
            metadata.insert(Value::from(NAME), Value::from(name));
        }
    }

    fn lookup(&self, path: &str) -> Result<&Value, LookupError> {
        let mut node = &self.0;
        let mut walked: Vec<&str> = Vec::new();

        for segment in path.split('.') {
            let mapping = node.as_mapping().ok_or_else(|| LookupError::NotAMapping {
                path: if walked.is_empty() {
                    "<root>".to_string()
                } else {
                    walked.join(".")
                },
                segment: segment.to_string(),
            })?;
            walked.push(segment);
            node = mapping
                .get(segment)
                .ok_or_else(|| LookupError::FieldNotFound {
                    path: walked.join("."),
                })?;
        }

        Ok(node)
    }

    fn canonical_bytes(node: &Value) -> Result<Vec<u8>, CanonicalError> {
        canonical_json(node)
    }

    fn dump(&self) -> String {
        serde_yaml::to_string(&self.0)
            .unwrap_or_else(|e| format!("<unprintable document: {e}>"))
    }
}
