// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Content digests used to build name suffixes.

use sha2::{Digest, Sha256};

use crate::config::consts::MAX_SUFFIX_LENGTH;

/// SHA-256 of `bytes` rendered as lowercase hex (64 characters).
pub fn content_hash(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// The first `len` hex characters of the SHA-256 of `bytes`.
///
/// `len` is clamped to the full digest width.
///
/// # Example
/// ```
/// use job_hasher::utils::short_hash;
///
/// assert_eq!(short_hash(br#"{"image":"x"}"#, 10), "ae2690ffaf");
/// ```
pub fn short_hash(bytes: &[u8], len: usize) -> String {
    let mut hash = content_hash(bytes);
    hash.truncate(len.min(MAX_SUFFIX_LENGTH));
    hash
}
