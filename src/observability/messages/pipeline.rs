// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for group processing in the chain runner.

use crate::model::ResourceType;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Group processing started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use asset_chain::model::ResourceType;
/// use asset_chain::observability::messages::pipeline::GroupProcessingStarted;
///
/// let msg = GroupProcessingStarted {
///     resource_type: ResourceType::Css,
///     resource_count: 3,
///     minimize: true,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct GroupProcessingStarted {
    pub resource_type: ResourceType,
    pub resource_count: usize,
    pub minimize: bool,
}

impl Display for GroupProcessingStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processing {} group: {} resources, minimize={}",
            self.resource_type, self.resource_count, self.minimize
        )
    }
}

impl StructuredLog for GroupProcessingStarted {
    fn log(&self) {
        tracing::info!(
            resource_type = %self.resource_type,
            resource_count = self.resource_count,
            minimize = self.minimize,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "group_processing",
            span_name = name,
            resource_type = %self.resource_type,
            resource_count = self.resource_count,
        )
    }
}

/// Group processing completed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct GroupProcessingCompleted {
    pub resource_type: ResourceType,
    pub output_size: usize,
    pub duration: std::time::Duration,
}

impl Display for GroupProcessingCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processed {} group: output={} bytes in {:?}",
            self.resource_type, self.output_size, self.duration
        )
    }
}

impl StructuredLog for GroupProcessingCompleted {
    fn log(&self) {
        tracing::info!(
            resource_type = %self.resource_type,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "group_completed",
            span_name = name,
            resource_type = %self.resource_type,
            duration = ?self.duration,
        )
    }
}
