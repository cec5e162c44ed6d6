// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::local::LocalProcessorFactory;
use crate::capabilities::{CapabilityRegistry, ProcessorCapabilities};
use crate::config::{Config, ProcessorConfig};
use crate::decorators::original_decorated_object;
use crate::engine::ChainRunner;
use crate::errors::FactoryError;
use crate::observability::messages::decorator::CapabilitiesResolved;
use crate::observability::messages::StructuredLog;
use crate::traits::Processor;

/// Builds a ready-to-run [`ChainRunner`] from configuration.
///
/// Every configured processor is created through [`LocalProcessorFactory`]
/// and wrapped in its decorators. The capabilities each chain resolves to
/// are logged once at build time.
///
/// # Examples
///
/// ```
/// use asset_chain::capabilities::CapabilityRegistry;
/// use asset_chain::config::{Config, DecoratorKind, ProcessorConfig, RuntimeBuilder};
///
/// let config = Config {
///     minimize: true,
///     pre_processors: vec![],
///     post_processors: vec![ProcessorConfig {
///         id: "css".to_string(),
///         impl_: Some("css_minifier".to_string()),
///         decorators: vec![DecoratorKind::Lazy, DecoratorKind::Benchmark],
///     }],
/// };
///
/// let runner = RuntimeBuilder::from_config(&config, CapabilityRegistry::builtin()).unwrap();
/// assert_eq!(runner.describe()[0].original, "css_minifier");
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    pub fn from_config(cfg: &Config, registry: Arc<CapabilityRegistry>) -> Result<ChainRunner, FactoryError> {
        let mut runner = ChainRunner::new(registry.clone(), cfg.minimize);

        for processor_config in &cfg.pre_processors {
            let processor = Self::build(processor_config, &registry)?;
            runner = runner.with_pre_processor(processor_config.id.clone(), processor);
        }
        for processor_config in &cfg.post_processors {
            let processor = Self::build(processor_config, &registry)?;
            runner = runner.with_post_processor(processor_config.id.clone(), processor);
        }

        Ok(runner)
    }

    fn build(config: &ProcessorConfig, registry: &Arc<CapabilityRegistry>) -> Result<Arc<dyn Processor>, FactoryError> {
        let processor = LocalProcessorFactory::create_chain(config, registry)?;

        let capabilities = ProcessorCapabilities::resolve(registry, processor.as_ref());
        CapabilitiesResolved {
            processor_id: &config.id,
            original: original_decorated_object(processor.as_ref()).name(),
            supported_types: &capabilities.supported_resource_types(),
            minimize: capabilities.minimize,
        }
        .log();

        Ok(processor)
    }
}
