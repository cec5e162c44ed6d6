// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use super::ProcessorDecorator;
use crate::capabilities::CapabilityRegistry;
use crate::errors::ProcessorResult;
use crate::model::Resource;
use crate::observability::messages::{decorator::LazyProcessorInstantiated, StructuredLog};
use crate::traits::Processor;

type ProcessorFactory = Box<dyn Fn() -> Arc<dyn Processor> + Send + Sync>;

/// Defers creating the wrapped processor until it is first needed.
///
/// Any access through the decoration accessor counts: a capability query or
/// an unwrap instantiates the processor just like a `process` call does. The
/// factory runs at most once.
pub struct LazyProcessorDecorator {
    factory: ProcessorFactory,
    inner: OnceLock<Arc<dyn Processor>>,
    registry: Arc<CapabilityRegistry>,
}

impl LazyProcessorDecorator {
    pub fn new<F>(factory: F, registry: Arc<CapabilityRegistry>) -> Self
    where
        F: Fn() -> Arc<dyn Processor> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            inner: OnceLock::new(),
            registry,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.get().is_some()
    }

    fn inner(&self) -> &Arc<dyn Processor> {
        self.inner.get_or_init(|| {
            let processor = (self.factory)();
            LazyProcessorInstantiated {
                processor: processor.name(),
            }
            .log();
            processor
        })
    }
}

#[async_trait]
impl Processor for LazyProcessorDecorator {
    async fn process(
        &self,
        resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        self.inner().process(resource, reader, writer).await
    }

    fn name(&self) -> &'static str {
        "lazy"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_decorator(&self) -> Option<&dyn ProcessorDecorator> {
        Some(self)
    }
}

impl ProcessorDecorator for LazyProcessorDecorator {
    fn decorated_object(&self) -> &dyn Processor {
        self.inner().as_ref()
    }

    fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::backends::local::CssMinifierProcessor;
    use crate::decorators::DecoratorCapabilities;
    use crate::model::ResourceType;
    use crate::traits::MinimizeAware;

    fn counted_factory(created: Arc<AtomicUsize>) -> impl Fn() -> Arc<dyn Processor> + Send + Sync + 'static {
        move || {
            created.fetch_add(1, Ordering::SeqCst);
            Arc::new(CssMinifierProcessor::new()) as Arc<dyn Processor>
        }
    }

    #[test]
    fn test_nothing_created_until_first_access() {
        let created = Arc::new(AtomicUsize::new(0));
        let lazy = LazyProcessorDecorator::new(counted_factory(created.clone()), CapabilityRegistry::builtin());

        assert!(!lazy.is_initialized());
        assert_eq!(created.load(Ordering::SeqCst), 0);

        assert_eq!(lazy.supported_resource_types(), vec![ResourceType::Css]);
        assert!(lazy.is_minimize());
        assert!(lazy.is_initialized());
        assert_eq!(lazy.original_decorated_object().name(), "css_minifier");
        assert_eq!(created.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_factory_runs_once_across_calls() {
        let created = Arc::new(AtomicUsize::new(0));
        let lazy = LazyProcessorDecorator::new(counted_factory(created.clone()), CapabilityRegistry::builtin());

        for _ in 0..3 {
            let mut output = Vec::new();
            lazy.process(None, &mut &b"a  {  color : red ; }"[..], &mut output)
                .await
                .unwrap();
            assert_eq!(output, b"a{color:red}".to_vec());
        }

        assert_eq!(created.load(Ordering::SeqCst), 1);
    }
}
