// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor execution and lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Processor execution lifecycle (start, completion, failure)
//! * Processors skipped because their capabilities do not match a resource

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processor execution started.
///
/// # Log Level
/// `debug!` - Per-resource detail
///
/// # Example
/// ```
/// use asset_chain::observability::messages::processor::ProcessorExecutionStarted;
///
/// let msg = ProcessorExecutionStarted {
///     processor_id: "css_min",
///     resource_uri: Some("site.css"),
///     input_size: 1024,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ProcessorExecutionStarted<'a> {
    pub processor_id: &'a str,
    pub resource_uri: Option<&'a str>,
    pub input_size: usize,
}

impl Display for ProcessorExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' execution started on {}: input_size={} bytes",
            self.processor_id,
            self.resource_uri.unwrap_or("<group>"),
            self.input_size
        )
    }
}

impl StructuredLog for ProcessorExecutionStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            resource_uri = self.resource_uri,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_execution",
            span_name = name,
            processor_id = self.processor_id,
            resource_uri = self.resource_uri,
            input_size = self.input_size,
        )
    }
}

/// Processor execution completed successfully.
///
/// # Log Level
/// `debug!` - Per-resource detail
pub struct ProcessorExecutionCompleted<'a> {
    pub processor_id: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: std::time::Duration,
}

impl Display for ProcessorExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed: input={} bytes, output={} bytes, duration={:?}",
            self.processor_id, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for ProcessorExecutionCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_completed",
            span_name = name,
            processor_id = self.processor_id,
            output_size = self.output_size,
            duration = ?self.duration,
        )
    }
}

/// Processor execution failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use asset_chain::observability::messages::processor::ProcessorExecutionFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
/// let msg = ProcessorExecutionFailed {
///     processor_id: "css_min",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ProcessorExecutionFailed<'a> {
    pub processor_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' execution failed: {}",
            self.processor_id, self.error
        )
    }
}

impl StructuredLog for ProcessorExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "processor_failed",
            span_name = name,
            processor_id = self.processor_id,
            error = %self.error,
        )
    }
}

/// Processor not applied because its capabilities exclude the resource.
///
/// # Log Level
/// `debug!` - Routine routing decision
pub struct ProcessorSkipped<'a> {
    pub processor_id: &'a str,
    pub resource_uri: &'a str,
    pub reason: &'a str,
}

impl Display for ProcessorSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' skipped for '{}': {}",
            self.processor_id, self.resource_uri, self.reason
        )
    }
}

impl StructuredLog for ProcessorSkipped<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_id = self.processor_id,
            resource_uri = self.resource_uri,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_skipped",
            span_name = name,
            processor_id = self.processor_id,
            resource_uri = self.resource_uri,
        )
    }
}
