// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the crate. Message types follow a struct-based pattern with `Display`
//! for the text and `StructuredLog` for the fielded `tracing` event, which keeps
//! log wording out of the processing code.
//!
//! # Usage
//!
//! ```rust
//! use asset_chain::observability::messages::processor::ProcessorExecutionFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = ProcessorExecutionFailed {
//!     processor_id: "my_processor",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

use crate::config::consts::DEFAULT_LOG_FILTER;

/// Install the global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_LOG_FILTER`]. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
