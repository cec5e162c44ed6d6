// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation warnings and errors.
//!
//! This module contains message types for logging events related to:
//! * Validation start and outcome
//! * Individual validation errors

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration validation started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use asset_chain::observability::messages::validation::ValidationStarted;
///
/// let msg = ValidationStarted {
///     processor_count: 5,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ValidationStarted {
    pub processor_count: usize,
}

impl Display for ValidationStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting configuration validation for {} processors",
            self.processor_count
        )
    }
}

impl StructuredLog for ValidationStarted {
    fn log(&self) {
        tracing::info!(
            processor_count = self.processor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            processor_count = self.processor_count,
        )
    }
}

/// A single validation error.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ValidationIssue<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for ValidationIssue<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.error)
    }
}

impl StructuredLog for ValidationIssue<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            error = %self.error,
        )
    }
}

/// Configuration validation finished.
///
/// # Log Level
/// `info!` when clean, `error!` when errors were found
pub struct ValidationCompleted {
    pub processor_count: usize,
    pub error_count: usize,
}

impl Display for ValidationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration validation finished: {} processors, {} errors",
            self.processor_count, self.error_count
        )
    }
}

impl StructuredLog for ValidationCompleted {
    fn log(&self) {
        if self.error_count == 0 {
            tracing::info!(
                processor_count = self.processor_count,
                error_count = self.error_count,
                "{}", self
            );
        } else {
            tracing::error!(
                processor_count = self.processor_count,
                error_count = self.error_count,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            processor_count = self.processor_count,
            error_count = self.error_count,
        )
    }
}
