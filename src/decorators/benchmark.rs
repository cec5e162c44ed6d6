// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use super::{original_decorated_object, ProcessorDecorator};
use crate::capabilities::CapabilityRegistry;
use crate::errors::ProcessorResult;
use crate::model::Resource;
use crate::observability::messages::{decorator::ProcessorBenchmarked, StructuredLog};
use crate::traits::Processor;

/// Measures how long the wrapped processor takes per call.
///
/// Each call is logged as a [`ProcessorBenchmarked`] event, successful or
/// not, and accumulated into [`BenchmarkProcessorDecorator::total_elapsed`].
pub struct BenchmarkProcessorDecorator {
    inner: Arc<dyn Processor>,
    registry: Arc<CapabilityRegistry>,
    calls: AtomicU64,
    elapsed_nanos: AtomicU64,
}

impl BenchmarkProcessorDecorator {
    pub fn new(inner: Arc<dyn Processor>, registry: Arc<CapabilityRegistry>) -> Self {
        Self {
            inner,
            registry,
            calls: AtomicU64::new(0),
            elapsed_nanos: AtomicU64::new(0),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn total_elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos.load(Ordering::Relaxed))
    }
}

#[async_trait]
impl Processor for BenchmarkProcessorDecorator {
    async fn process(
        &self,
        resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        let start = Instant::now();
        let result = self.inner.process(resource, reader, writer).await;
        let duration = start.elapsed();

        self.calls.fetch_add(1, Ordering::Relaxed);
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.elapsed_nanos.fetch_add(nanos, Ordering::Relaxed);

        ProcessorBenchmarked {
            processor: original_decorated_object(self.inner.as_ref()).name(),
            resource_uri: resource.map(|r| r.uri.as_str()),
            duration,
        }
        .log();

        result
    }

    fn name(&self) -> &'static str {
        "benchmark"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_decorator(&self) -> Option<&dyn ProcessorDecorator> {
        Some(self)
    }
}

impl ProcessorDecorator for BenchmarkProcessorDecorator {
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
    use crate::backends::stub::{FailingProcessor, StubProcessor};
    use crate::errors::ProcessorError;

    #[tokio::test]
    async fn test_counts_calls_and_passes_output_through() {
        let decorator = BenchmarkProcessorDecorator::new(
            Arc::new(StubProcessor::new("echo")),
            CapabilityRegistry::builtin(),
        );

        let start = Instant::now();
        for _ in 0..3 {
            let mut output = Vec::new();
            decorator
                .process(None, &mut &b"a { }"[..], &mut output)
                .await
                .unwrap();
            assert_eq!(output, b"a { }".to_vec());
        }
        let wall = start.elapsed();

        assert_eq!(decorator.calls(), 3);
        assert!(decorator.total_elapsed() <= wall);
    }

    #[tokio::test]
    async fn test_failure_is_counted_and_propagated() {
        let decorator = BenchmarkProcessorDecorator::new(
            Arc::new(FailingProcessor::new("broken")),
            CapabilityRegistry::builtin(),
        );

        let mut output = Vec::new();
        let error = decorator
            .process(None, &mut &b"x"[..], &mut output)
            .await
            .unwrap_err();

        assert!(matches!(error, ProcessorError::Failed { ref processor, .. } if processor == "broken"));
        assert_eq!(decorator.calls(), 1);
    }
}
