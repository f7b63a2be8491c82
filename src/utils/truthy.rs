// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Boolean parsing for untyped annotation values.
//!
//! Annotations are plain strings, so an opt-in marker has to be parsed from
//! text. The accepted literal set is fixed:
//!
//! | true                       | false                         |
//! |----------------------------|-------------------------------|
//! | `1 t T true TRUE True`     | `0 f F false FALSE False`     |
//!
//! Any other input, including the empty string, mixed case such as `tRuE`,
//! `yes`/`no` and values with surrounding whitespace, is an error.

use thiserror::Error;

/// The input was not one of the accepted boolean literals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid boolean literal: '{0}'")]
pub struct ParseBoolError(pub String);

/// Parse `value` against the fixed boolean literal set.
///
/// # Example
/// ```
/// use job_hasher::utils::parse_bool;
///
/// assert_eq!(parse_bool("True"), Ok(true));
/// assert_eq!(parse_bool("0"), Ok(false));
/// assert!(parse_bool("yes").is_err());
/// ```
pub fn parse_bool(value: &str) -> Result<bool, ParseBoolError> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ParseBoolError(value.to_string())),
    }
}
