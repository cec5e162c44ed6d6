// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use super::{original_decorated_object, ProcessorDecorator};
use crate::capabilities::CapabilityRegistry;
use crate::errors::ProcessorResult;
use crate::model::Resource;
use crate::observability::messages::{decorator::ProcessorFailureIgnored, StructuredLog};
use crate::traits::Processor;

/// Optionally shields the pipeline from a failing processor.
///
/// The wrapped output is buffered so that nothing partial reaches `writer`.
/// With `ignore_failures` set, a failure is logged and the original input is
/// written instead; otherwise the failure is returned unchanged.
pub struct FailSafeProcessorDecorator {
    inner: Arc<dyn Processor>,
    registry: Arc<CapabilityRegistry>,
    ignore_failures: bool,
}

impl FailSafeProcessorDecorator {
    pub fn new(inner: Arc<dyn Processor>, registry: Arc<CapabilityRegistry>, ignore_failures: bool) -> Self {
        Self {
            inner,
            registry,
            ignore_failures,
        }
    }

    pub fn ignores_failures(&self) -> bool {
        self.ignore_failures
    }
}

#[async_trait]
impl Processor for FailSafeProcessorDecorator {
    async fn process(
        &self,
        resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input).await?;

        let mut output = Vec::new();
        let result = self
            .inner
            .process(resource, &mut input.as_slice(), &mut output)
            .await;

        let output = match result {
            Ok(()) => output,
            Err(error) if self.ignore_failures => {
                ProcessorFailureIgnored {
                    processor: original_decorated_object(self.inner.as_ref()).name(),
                    resource_uri: resource.map(|r| r.uri.as_str()),
                    error: &error,
                }
                .log();
                input
            }
            Err(error) => return Err(error),
        };

        writer.write_all(&output).await?;
        writer.flush().await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "fail_safe"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_decorator(&self) -> Option<&dyn ProcessorDecorator> {
        Some(self)
    }
}

impl ProcessorDecorator for FailSafeProcessorDecorator {
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
    use crate::backends::stub::FailingProcessor;
    use crate::errors::ProcessorError;

    #[tokio::test]
    async fn test_ignored_failure_passes_input_through() {
        let decorator =
            FailSafeProcessorDecorator::new(Arc::new(FailingProcessor::new("broken")), CapabilityRegistry::builtin(), true);

        let mut output = Vec::new();
        decorator
            .process(None, &mut &b"keep me"[..], &mut output)
            .await
            .unwrap();

        assert_eq!(output, b"keep me".to_vec());
    }

    #[tokio::test]
    async fn test_failure_propagates_when_not_ignored() {
        let decorator =
            FailSafeProcessorDecorator::new(Arc::new(FailingProcessor::new("broken")), CapabilityRegistry::builtin(), false);

        let mut output = Vec::new();
        let error = decorator
            .process(None, &mut &b"x"[..], &mut output)
            .await
            .unwrap_err();

        assert!(matches!(error, ProcessorError::Failed { .. }));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_success_writes_inner_output() {
        let decorator = FailSafeProcessorDecorator::new(
            Arc::new(SemicolonAppenderProcessor::new()),
            CapabilityRegistry::builtin(),
            true,
        );

        let mut output = Vec::new();
        decorator
            .process(None, &mut &b"f()"[..], &mut output)
            .await
            .unwrap();

        assert_eq!(output, b"f();".to_vec());
    }
}
