// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod digest;
pub mod truthy;

pub use digest::{content_hash, short_hash};
pub use truthy::{parse_bool, ParseBoolError};
