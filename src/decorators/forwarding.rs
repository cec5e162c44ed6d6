// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use super::ProcessorDecorator;
use crate::capabilities::CapabilityRegistry;
use crate::errors::ProcessorResult;
use crate::model::Resource;
use crate::traits::Processor;

/// Decorator that adds nothing: every call and capability query goes to the
/// wrapped processor.
pub struct ForwardingDecorator {
    inner: Arc<dyn Processor>,
    registry: Arc<CapabilityRegistry>,
}

impl ForwardingDecorator {
    pub fn new(inner: Arc<dyn Processor>, registry: Arc<CapabilityRegistry>) -> Self {
        Self { inner, registry }
    }
}

#[async_trait]
impl Processor for ForwardingDecorator {
    async fn process(
        &self,
        resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        self.inner.process(resource, reader, writer).await
    }

    fn name(&self) -> &'static str {
        "forwarding"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_decorator(&self) -> Option<&dyn ProcessorDecorator> {
        Some(self)
    }
}

impl ProcessorDecorator for ForwardingDecorator {
    fn decorated_object(&self) -> &dyn Processor {
        self.inner.as_ref()
    }

    fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::SemicolonAppenderProcessor;
    use crate::decorators::same_processor;

    #[tokio::test]
    async fn test_forwards_process_with_context() {
        let decorator = ForwardingDecorator::new(
            Arc::new(SemicolonAppenderProcessor::new()),
            CapabilityRegistry::builtin(),
        );
        let resource = Resource::from_uri("app.js").unwrap();

        let mut output = Vec::new();
        decorator
            .process(Some(&resource), &mut &b"var a = 1"[..], &mut output)
            .await
            .unwrap();

        assert_eq!(output, b"var a = 1;".to_vec());
    }

    #[test]
    fn test_inner_is_shared_not_owned() {
        let inner: Arc<dyn Processor> = Arc::new(SemicolonAppenderProcessor::new());
        let registry = CapabilityRegistry::builtin();
        let first = ForwardingDecorator::new(inner.clone(), registry.clone());
        let second = ForwardingDecorator::new(inner.clone(), registry);

        assert!(same_processor(first.decorated_object(), second.decorated_object()));
        assert_eq!(Arc::strong_count(&inner), 3);
    }
}
