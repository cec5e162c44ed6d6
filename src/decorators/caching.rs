// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use super::{original_decorated_object, ProcessorDecorator};
use crate::capabilities::CapabilityRegistry;
use crate::errors::ProcessorResult;
use crate::model::Resource;
use crate::observability::messages::{decorator::CacheLookup, StructuredLog};
use crate::traits::Processor;

/// Memoizes the wrapped processor's output.
///
/// Entries are keyed by a SHA-256 digest of the whole call: whether a
/// resource was given, its length-prefixed uri, type and minimize flag, then
/// the full input. Only successful outputs are stored; a failure is returned
/// as-is and the next call retries.
///
/// The cache is unbounded and never evicts on its own; callers that need a
/// bound use [`CachingProcessorDecorator::clear`].
pub struct CachingProcessorDecorator {
    inner: Arc<dyn Processor>,
    registry: Arc<CapabilityRegistry>,
    cache: Mutex<HashMap<String, Arc<Vec<u8>>>>,
}

impl CachingProcessorDecorator {
    pub fn new(inner: Arc<dyn Processor>, registry: Arc<CapabilityRegistry>) -> Self {
        Self {
            inner,
            registry,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.cache.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cache.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }

    fn cache_key(resource: Option<&Resource>, input: &[u8]) -> String {
        let mut hasher = Sha256::new();
        match resource {
            None => hasher.update([0u8]),
            Some(resource) => {
                hasher.update([1u8]);
                hasher.update((resource.uri.len() as u64).to_le_bytes());
                hasher.update(resource.uri.as_bytes());
                hasher.update(resource.resource_type.extension().as_bytes());
                hasher.update([u8::from(resource.minimize)]);
            }
        }
        hasher.update(input);
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl Processor for CachingProcessorDecorator {
    async fn process(
        &self,
        resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input).await?;

        let key = Self::cache_key(resource, &input);
        let processor = original_decorated_object(self.inner.as_ref()).name();

        let cached = self.cache.lock().await.get(&key).cloned();
        CacheLookup {
            processor,
            key: &key,
            hit: cached.is_some(),
        }
        .log();

        let output = match cached {
            Some(output) => output,
            None => {
                let mut output = Vec::new();
                self.inner
                    .process(resource, &mut input.as_slice(), &mut output)
                    .await?;
                let output = Arc::new(output);
                self.cache.lock().await.insert(key, output.clone());
                output
            }
        };

        writer.write_all(&output).await?;
        writer.flush().await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "caching"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_decorator(&self) -> Option<&dyn ProcessorDecorator> {
        Some(self)
    }
}

impl ProcessorDecorator for CachingProcessorDecorator {
    fn decorated_object(&self) -> &dyn Processor {
        self.inner.as_ref()
    }

    fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }
}
