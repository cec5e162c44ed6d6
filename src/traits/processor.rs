// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The processor abstraction and the optional capability-reporting contract.
//!
//! A processor exposes one real transformation entry point, the context-aware
//! [`Processor::process`]. The context-free shape used in post-processing
//! position is [`PostProcessor::process_without_context`], which every
//! processor gets through a blanket implementation and therefore cannot
//! redefine.
//!
//! Capability metadata is discovered through explicit queries instead of type
//! tests: a processor that wants to state its own supported type or minimize
//! flag returns `Some(self)` from [`Processor::as_supported_type_aware`] or
//! [`Processor::as_minimize_aware`]. A processor that wraps another returns
//! `Some(self)` from [`Processor::as_decorator`], which is enough for its
//! capabilities to be forwarded.

use std::any::Any;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::decorators::ProcessorDecorator;
use crate::errors::ProcessorResult;
use crate::model::{Resource, ResourceType};

#[async_trait]
pub trait Processor: Send + Sync + 'static {
    /// Transform everything read from `reader` into `writer`.
    ///
    /// `resource` is `None` when the processor runs on a merged group rather
    /// than on a single resource.
    async fn process(
        &self,
        resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()>;

    fn name(&self) -> &'static str;

    /// Concrete-type access used to look up static declarations.
    fn as_any(&self) -> &dyn Any;

    fn as_supported_type_aware(&self) -> Option<&dyn SupportedResourceTypeAware> {
        None
    }

    fn as_minimize_aware(&self) -> Option<&dyn MinimizeAware> {
        None
    }

    fn as_decorator(&self) -> Option<&dyn ProcessorDecorator> {
        None
    }
}

/// A processor that states its supported resource type itself.
///
/// The reported value overrides any static declaration of the processor's type.
pub trait SupportedResourceTypeAware {
    /// `None` means every resource type.
    fn supported_resource_type(&self) -> Option<ResourceType>;
}

/// A processor that states its minimize eligibility itself.
pub trait MinimizeAware {
    fn is_minimize(&self) -> bool;
}

/// Context-free entry point, always equivalent to `process(None, ..)`.
#[async_trait]
pub trait PostProcessor {
    async fn process_without_context(
        &self,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()>;
}

#[async_trait]
impl<P: Processor + ?Sized> PostProcessor for P {
    async fn process_without_context(
        &self,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        self.process(None, reader, writer).await
    }
}
