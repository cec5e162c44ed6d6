// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::errors::{ProcessorError, ProcessorResult};
use crate::model::{Resource, ResourceType};
use crate::traits::{MinimizeAware, Processor, SupportedResourceTypeAware};

async fn echo(
    reader: &mut (dyn AsyncRead + Unpin + Send),
    writer: &mut (dyn AsyncWrite + Unpin + Send),
) -> ProcessorResult<()> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    writer.write_all(&bytes).await?;
    Ok(())
}

/// A stub processor that copies its input unchanged
pub struct StubProcessor {
    pub id: String,
}

impl StubProcessor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Processor for StubProcessor {
    async fn process(
        &self,
        _resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        echo(reader, writer).await
    }

    fn name(&self) -> &'static str {
        "stub"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A processor that always fails without writing anything
pub struct FailingProcessor {
    pub id: String,
}

impl FailingProcessor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Processor for FailingProcessor {
    async fn process(
        &self,
        _resource: Option<&Resource>,
        _reader: &mut (dyn AsyncRead + Unpin + Send),
        _writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        Err(ProcessorError::failed(&self.id, "Simulated processor failure"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A processor whose reported capabilities can change after construction
pub struct ReportingProcessor {
    reported: RwLock<(Option<ResourceType>, bool)>,
}

impl ReportingProcessor {
    pub fn new(supported_type: Option<ResourceType>, minimize: bool) -> Self {
        Self {
            reported: RwLock::new((supported_type, minimize)),
        }
    }

    pub fn set(&self, supported_type: Option<ResourceType>, minimize: bool) {
        *self.reported.write().unwrap() = (supported_type, minimize);
    }
}

#[async_trait]
impl Processor for ReportingProcessor {
    async fn process(
        &self,
        _resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        echo(reader, writer).await
    }

    fn name(&self) -> &'static str {
        "reporting"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_supported_type_aware(&self) -> Option<&dyn SupportedResourceTypeAware> {
        Some(self)
    }

    fn as_minimize_aware(&self) -> Option<&dyn MinimizeAware> {
        Some(self)
    }
}

impl SupportedResourceTypeAware for ReportingProcessor {
    fn supported_resource_type(&self) -> Option<ResourceType> {
        self.reported.read().unwrap().0
    }
}

impl MinimizeAware for ReportingProcessor {
    fn is_minimize(&self) -> bool {
        self.reported.read().unwrap().1
    }
}

/// Prefixes its output with the resource uri it was given, or `[none]`.
///
/// With details on, the tag also carries the resource type and `min` or
/// `full` for the minimize flag: `[uri:type:min]`.
pub struct ContextTaggingProcessor {
    details: bool,
}

impl ContextTaggingProcessor {
    pub fn new() -> Self {
        Self { details: false }
    }

    pub fn with_details(details: bool) -> Self {
        Self { details }
    }
}

#[async_trait]
impl Processor for ContextTaggingProcessor {
    async fn process(
        &self,
        resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        let tag = match resource {
            Some(resource) if self.details => format!(
                "[{}:{}:{}]",
                resource.uri,
                resource.resource_type,
                if resource.minimize { "min" } else { "full" }
            ),
            Some(resource) => format!("[{}]", resource.uri),
            None => "[none]".to_string(),
        };
        writer.write_all(tag.as_bytes()).await?;
        echo(reader, writer).await
    }

    fn name(&self) -> &'static str {
        "context_tagging"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Echoes its input and counts how often it ran
pub struct CountingProcessor {
    calls: AtomicUsize,
}

impl CountingProcessor {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Processor for CountingProcessor {
    async fn process(
        &self,
        _resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        echo(reader, writer).await
    }

    fn name(&self) -> &'static str {
        "counting"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
