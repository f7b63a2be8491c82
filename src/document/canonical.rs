// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Canonical JSON encoding of YAML sub-structures.
//!
//! The encoding is the one kustomize's kyaml produces for a node, so hash
//! suffixes agree with names generated by kyaml-based functions:
//!
//! * object keys sorted bytewise at every nesting level
//! * no insignificant whitespace
//! * `<`, `>`, `&`, U+2028 and U+2029 escaped as `\uXXXX`
//! * control characters other than `\n`, `\r` and `\t` escaped as `\u00XX`
//! * floats in shortest form, integral floats without a fraction (`1.0` is `1`),
//!   exponent notation outside `[1e-6, 1e21)`
//!
//! A top-level null encodes as `{}`. A top-level scalar is an error, as are
//! non-string mapping keys and non-finite floats.

use serde::Serialize;
use serde_json::ser::{CharEscape, CompactFormatter, Formatter};
use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value;
use std::io;

use crate::errors::CanonicalError;

/// Encode `node` to canonical JSON bytes.
pub fn canonical_json(node: &Value) -> Result<Vec<u8>, CanonicalError> {
    let json = match untagged(node) {
        Value::Null => JsonValue::Object(Map::new()),
        collection @ (Value::Mapping(_) | Value::Sequence(_)) => to_json(collection)?,
        scalar => return Err(CanonicalError::NotACollection(type_name(scalar))),
    };

    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, CanonicalFormatter);
    json.serialize(&mut serializer)?;
    Ok(out)
}

fn untagged(node: &Value) -> &Value {
    match node {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

fn type_name(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(tagged) => type_name(&tagged.value),
    }
}

/// Convert to a `serde_json::Value`, whose `Map` keeps keys sorted.
fn to_json(node: &Value) -> Result<JsonValue, CanonicalError> {
    Ok(match node {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::from(i)
            } else if let Some(u) = n.as_u64() {
                JsonValue::from(u)
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                let number = Number::from_f64(f).ok_or(CanonicalError::NonFiniteNumber(f))?;
                JsonValue::Number(number)
            }
        }
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Sequence(items) => {
            JsonValue::Array(items.iter().map(to_json).collect::<Result<_, _>>()?)
        }
        Value::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                let key = match untagged(key) {
                    Value::String(s) => s.clone(),
                    other => return Err(CanonicalError::NonStringKey(format!("{other:?}"))),
                };
                object.insert(key, to_json(value)?);
            }
            JsonValue::Object(object)
        }
        Value::Tagged(tagged) => to_json(&tagged.value)?,
    })
}

/// Shortest float text, switching to exponent form outside `[1e-6, 1e21)`.
fn format_float(value: f64) -> String {
    let abs = value.abs();
    if abs == 0.0 || (1e-6..1e21).contains(&abs) {
        return format!("{value}");
    }
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Compact formatter with HTML-safe string escaping.
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, c) in fragment.char_indices() {
            let escaped: &[u8] = match c {
                '<' => b"\\u003c",
                '>' => b"\\u003e",
                '&' => b"\\u0026",
                '\u{2028}' => b"\\u2028",
                '\u{2029}' => b"\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped)?;
            start = index + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match char_escape {
            CharEscape::Backspace => writer.write_all(b"\\u0008"),
            CharEscape::FormFeed => writer.write_all(b"\\u000c"),
            other => CompactFormatter.write_char_escape(writer, other),
        }
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_float(value).as_bytes())
    }
}
