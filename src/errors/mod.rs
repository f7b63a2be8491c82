// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod document;
mod stream;

pub use config::ConfigError;
pub use document::{CanonicalError, HasherError, LookupError};
pub use stream::StreamError;
