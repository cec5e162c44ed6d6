// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message is a plain struct with a `Display` implementation for the
//! human-readable text and a [`StructuredLog`] implementation that emits the
//! same event with its fields attached.
//!
//! # Organization
//!
//! * `decorator` - capability resolution, unwrapping and decorator behavior
//! * `pipeline` - group processing in the chain runner
//! * `processor` - processor execution lifecycle
//! * `validation` - configuration validation
//!
//! # Usage Pattern
//!
//! ```rust
//! use asset_chain::observability::messages::{processor::ProcessorSkipped, StructuredLog};
//!
//! let msg = ProcessorSkipped {
//!     processor_id: "css_min",
//!     resource_uri: "app.js",
//!     reason: "unsupported resource type",
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod decorator;
pub mod pipeline;
pub mod processor;
pub mod validation;

/// Emit a message as a structured event, or open a span carrying its fields.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
