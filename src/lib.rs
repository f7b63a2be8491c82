// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // config + defaults
pub mod document;   // document abstraction
pub mod engine;     // pipeline pass
pub mod errors;     // error handling
pub mod observability;
pub mod processors; // document transformers
pub mod stream;     // stream decoding/encoding
pub mod traits;     // unified abstractions
pub mod utils;
