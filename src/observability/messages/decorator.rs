// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for decorator behavior.
//!
//! This module contains message types for logging events related to:
//! * Capability resolution for configured chains
//! * Unwrapping decoration chains
//! * Benchmarking, caching, lazy instantiation and failure suppression

use crate::model::ResourceType;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

fn join_types(types: &[ResourceType]) -> String {
    types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Capabilities resolved for a configured processor chain.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use asset_chain::model::ResourceType;
/// use asset_chain::observability::messages::decorator::CapabilitiesResolved;
///
/// let msg = CapabilitiesResolved {
///     processor_id: "css_min",
///     original: "css_minifier",
///     supported_types: &[ResourceType::Css],
///     minimize: true,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct CapabilitiesResolved<'a> {
    pub processor_id: &'a str,
    pub original: &'a str,
    pub supported_types: &'a [ResourceType],
    pub minimize: bool,
}

impl Display for CapabilitiesResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' (original '{}') supports [{}], minimize={}",
            self.processor_id,
            self.original,
            join_types(self.supported_types),
            self.minimize
        )
    }
}

impl StructuredLog for CapabilitiesResolved<'_> {
    fn log(&self) {
        tracing::info!(
            processor_id = self.processor_id,
            original = self.original,
            supported_types = join_types(self.supported_types),
            minimize = self.minimize,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "capabilities_resolved",
            span_name = name,
            processor_id = self.processor_id,
            original = self.original,
        )
    }
}

/// Unwrapping stopped at the depth guard.
///
/// # Log Level
/// `warn!` - Malformed decoration chain
pub struct DecorationDepthExceeded<'a> {
    pub processor: &'a str,
    pub max_depth: usize,
}

impl Display for DecorationDepthExceeded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Decoration chain exceeds {} levels; stopped unwrapping at '{}'",
            self.max_depth, self.processor
        )
    }
}

impl StructuredLog for DecorationDepthExceeded<'_> {
    fn log(&self) {
        tracing::warn!(
            processor = self.processor,
            max_depth = self.max_depth,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "decoration_depth_exceeded",
            span_name = name,
            processor = self.processor,
            max_depth = self.max_depth,
        )
    }
}

/// Benchmark decorator measured one call.
///
/// # Log Level
/// `info!` - Timing is the purpose of the decorator
pub struct ProcessorBenchmarked<'a> {
    pub processor: &'a str,
    pub resource_uri: Option<&'a str>,
    pub duration: Duration,
}

impl Display for ProcessorBenchmarked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' took {:?} on {}",
            self.processor,
            self.duration,
            self.resource_uri.unwrap_or("<group>")
        )
    }
}

impl StructuredLog for ProcessorBenchmarked<'_> {
    fn log(&self) {
        tracing::info!(
            processor = self.processor,
            resource_uri = self.resource_uri,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor_benchmarked",
            span_name = name,
            processor = self.processor,
            duration = ?self.duration,
        )
    }
}

/// Caching decorator lookup result.
///
/// # Log Level
/// `debug!` - Routine
pub struct CacheLookup<'a> {
    pub processor: &'a str,
    pub key: &'a str,
    pub hit: bool,
}

impl Display for CacheLookup<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let outcome = if self.hit { "hit" } else { "miss" };
        write!(f, "Cache {} for '{}' (key {})", outcome, self.processor, self.key)
    }
}

impl StructuredLog for CacheLookup<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            key = self.key,
            hit = self.hit,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "cache_lookup",
            span_name = name,
            processor = self.processor,
            hit = self.hit,
        )
    }
}

/// Lazy decorator created its inner processor.
///
/// # Log Level
/// `debug!` - One-time lifecycle event
pub struct LazyProcessorInstantiated<'a> {
    pub processor: &'a str,
}

impl Display for LazyProcessorInstantiated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Lazily instantiated processor '{}'", self.processor)
    }
}

impl StructuredLog for LazyProcessorInstantiated<'_> {
    fn log(&self) {
        tracing::debug!(processor = self.processor, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "lazy_instantiated",
            span_name = name,
            processor = self.processor,
        )
    }
}

/// Fail-safe decorator swallowed a failure and passed the input through.
///
/// # Log Level
/// `warn!` - Degraded output
pub struct ProcessorFailureIgnored<'a> {
    pub processor: &'a str,
    pub resource_uri: Option<&'a str>,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorFailureIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ignoring failure of processor '{}' on {}: {}; input passed through unchanged",
            self.processor,
            self.resource_uri.unwrap_or("<group>"),
            self.error
        )
    }
}

impl StructuredLog for ProcessorFailureIgnored<'_> {
    fn log(&self) {
        tracing::warn!(
            processor = self.processor,
            resource_uri = self.resource_uri,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "processor_failure_ignored",
            span_name = name,
            processor = self.processor,
            error = %self.error,
        )
    }
}
