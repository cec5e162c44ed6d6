// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::processors::*;
use crate::capabilities::CapabilityRegistry;
use crate::config::{DecoratorKind, ProcessorConfig};
use crate::decorators::{
    BenchmarkProcessorDecorator, CachingProcessorDecorator, FailSafeProcessorDecorator, ForwardingDecorator,
    LazyProcessorDecorator,
};
use crate::errors::FactoryError;
use crate::traits::Processor;

/// Creates a fresh instance of one local processor implementation.
pub type ProcessorConstructor = fn() -> Arc<dyn Processor>;

fn comment_stripper() -> Arc<dyn Processor> {
    Arc::new(CommentStripperProcessor::new())
}

fn css_minifier() -> Arc<dyn Processor> {
    Arc::new(CssMinifierProcessor::new())
}

fn semicolon_appender() -> Arc<dyn Processor> {
    Arc::new(SemicolonAppenderProcessor::new())
}

fn trailing_newline() -> Arc<dyn Processor> {
    Arc::new(TrailingNewlineProcessor::new())
}

const IMPLEMENTATIONS: &[(&str, ProcessorConstructor)] = &[
    ("comment_stripper", comment_stripper),
    ("css_minifier", css_minifier),
    ("semicolon_appender", semicolon_appender),
    ("trailing_newline", trailing_newline),
];

/// Factory for creating local (in-process) processor chains
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create the bare processor named by the config's `impl_` field
    ///
    /// - "comment_stripper" -> CommentStripperProcessor
    /// - "css_minifier" -> CssMinifierProcessor
    /// - "semicolon_appender" -> SemicolonAppenderProcessor
    /// - "trailing_newline" -> TrailingNewlineProcessor
    pub fn create_processor(config: &ProcessorConfig) -> Result<Arc<dyn Processor>, FactoryError> {
        Ok(Self::constructor_for(config)?())
    }

    /// Create the processor and wrap it in the configured decorators,
    /// innermost first
    pub fn create_chain(
        config: &ProcessorConfig,
        registry: &Arc<CapabilityRegistry>,
    ) -> Result<Arc<dyn Processor>, FactoryError> {
        let constructor = Self::constructor_for(config)?;

        let (mut processor, first_outer): (Arc<dyn Processor>, usize) = match config.decorators.first() {
            Some(DecoratorKind::Lazy) => (
                Arc::new(LazyProcessorDecorator::new(constructor, registry.clone())) as Arc<dyn Processor>,
                1,
            ),
            _ => (constructor(), 0),
        };

        for (position, kind) in config.decorators.iter().enumerate().skip(first_outer) {
            processor = match kind {
                DecoratorKind::Forwarding => Arc::new(ForwardingDecorator::new(processor, registry.clone())),
                DecoratorKind::Benchmark => Arc::new(BenchmarkProcessorDecorator::new(processor, registry.clone())),
                DecoratorKind::Caching => Arc::new(CachingProcessorDecorator::new(processor, registry.clone())),
                DecoratorKind::FailSafe => {
                    Arc::new(FailSafeProcessorDecorator::new(processor, registry.clone(), true))
                }
                DecoratorKind::Lazy => {
                    return Err(FactoryError::LazyNotInnermost {
                        processor_id: config.id.clone(),
                        position,
                    })
                }
            };
        }

        Ok(processor)
    }

    /// Check a config without instantiating anything
    pub fn validate(config: &ProcessorConfig) -> Result<(), FactoryError> {
        Self::constructor_for(config)?;

        if let Some(position) = config
            .decorators
            .iter()
            .skip(1)
            .position(|kind| *kind == DecoratorKind::Lazy)
        {
            return Err(FactoryError::LazyNotInnermost {
                processor_id: config.id.clone(),
                position: position + 1,
            });
        }

        Ok(())
    }

    fn constructor_for(config: &ProcessorConfig) -> Result<ProcessorConstructor, FactoryError> {
        let impl_name = config
            .impl_
            .as_ref()
            .ok_or_else(|| FactoryError::MissingImplementation {
                processor_id: config.id.clone(),
            })?;

        Self::constructor(impl_name).ok_or_else(|| FactoryError::UnknownImplementation {
            processor_id: config.id.clone(),
            implementation: impl_name.clone(),
        })
    }

    pub fn constructor(impl_name: &str) -> Option<ProcessorConstructor> {
        IMPLEMENTATIONS
            .iter()
            .find(|(name, _)| *name == impl_name)
            .map(|(_, constructor)| *constructor)
    }

    /// Get list of available processor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        IMPLEMENTATIONS.iter().map(|(name, _)| *name).collect()
    }

    /// Check if a processor implementation is available
    pub fn is_implementation_available(impl_name: &str) -> bool {
        Self::constructor(impl_name).is_some()
    }
}
