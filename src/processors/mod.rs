// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod job_hasher;

pub use job_hasher::JobHasher;
