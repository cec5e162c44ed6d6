// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor decorators and the capability-forwarding protocol they share.
//!
//! A decorator wraps exactly one inner processor, which may itself be a
//! decorator. Whatever the depth, the scheduler must see the same supported
//! resource type and minimize flag as the innermost processor, so decorators
//! never declare capabilities of their own: they forward.
//!
//! # Fixed entry points and hooks
//!
//! Every type implementing [`ProcessorDecorator`] receives, through blanket
//! implementations it cannot replace:
//!
//! * [`SupportedResourceTypeAware`] calling
//!   [`ProcessorDecorator::supported_resource_type_internal`]
//! * [`MinimizeAware`] calling [`ProcessorDecorator::is_minimize_internal`]
//! * [`DecoratorCapabilities`] for the derived type list and unwrapping
//!
//! The two `*_internal` hooks default to resolving the decorated object and
//! may be overridden, at the implementor's risk, to diverge from it.
//!
//! # Available decorators
//!
//! * [`ForwardingDecorator`] - plain pass-through
//! * [`BenchmarkProcessorDecorator`] - times every call
//! * [`CachingProcessorDecorator`] - memoizes output per input digest
//! * [`LazyProcessorDecorator`] - creates the inner processor on first use
//! * [`FailSafeProcessorDecorator`] - optionally passes input through on failure
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use asset_chain::backends::local::CssMinifierProcessor;
//! use asset_chain::capabilities::CapabilityRegistry;
//! use asset_chain::decorators::{BenchmarkProcessorDecorator, CachingProcessorDecorator, DecoratorCapabilities};
//! use asset_chain::model::ResourceType;
//! use asset_chain::traits::{MinimizeAware, SupportedResourceTypeAware};
//!
//! let registry = CapabilityRegistry::builtin();
//! let caching = Arc::new(CachingProcessorDecorator::new(
//!     Arc::new(CssMinifierProcessor::new()),
//!     registry.clone(),
//! ));
//! let benchmark = BenchmarkProcessorDecorator::new(caching, registry);
//!
//! assert_eq!(benchmark.supported_resource_type(), Some(ResourceType::Css));
//! assert!(benchmark.is_minimize());
//! assert_eq!(benchmark.supported_resource_types(), vec![ResourceType::Css]);
//! assert_eq!(benchmark.original_decorated_object().name(), "css_minifier");
//! ```

mod benchmark;
mod caching;
mod fail_safe;
mod forwarding;
mod lazy;

pub use benchmark::BenchmarkProcessorDecorator;
pub use caching::CachingProcessorDecorator;
pub use fail_safe::FailSafeProcessorDecorator;
pub use forwarding::ForwardingDecorator;
pub use lazy::LazyProcessorDecorator;

use crate::capabilities::{minimize_for, supported_type_for, supported_types, CapabilityRegistry};
use crate::config::consts::MAX_DECORATION_DEPTH;
use crate::model::ResourceType;
use crate::observability::messages::{decorator::DecorationDepthExceeded, StructuredLog};
use crate::traits::{MinimizeAware, Processor, SupportedResourceTypeAware};

/// A processor that wraps another processor.
///
/// Implementors must also return `Some(self)` from
/// [`Processor::as_decorator`]; resolution and unwrapping find decorators
/// only through it.
pub trait ProcessorDecorator: Processor {
    /// The wrapped processor. Never owned exclusively; never mutated.
    fn decorated_object(&self) -> &dyn Processor;

    /// Registry used to resolve static declarations of the wrapped processor.
    fn registry(&self) -> &CapabilityRegistry;

    /// Resolution hook behind [`SupportedResourceTypeAware::supported_resource_type`].
    fn supported_resource_type_internal(&self) -> Option<ResourceType> {
        supported_type_for(self.registry(), self.decorated_object())
    }

    /// Resolution hook behind [`MinimizeAware::is_minimize`].
    fn is_minimize_internal(&self) -> bool {
        minimize_for(self.registry(), self.decorated_object())
    }
}

impl<D: ProcessorDecorator + ?Sized> SupportedResourceTypeAware for D {
    fn supported_resource_type(&self) -> Option<ResourceType> {
        self.supported_resource_type_internal()
    }
}

impl<D: ProcessorDecorator + ?Sized> MinimizeAware for D {
    fn is_minimize(&self) -> bool {
        self.is_minimize_internal()
    }
}

/// Derived views available on every decorator.
pub trait DecoratorCapabilities {
    /// The full [`ResourceType::ALL`] list or the single resolved type.
    fn supported_resource_types(&self) -> Vec<ResourceType>;

    /// The bottom-most, non-decorating processor of the chain.
    fn original_decorated_object(&self) -> &dyn Processor;
}

impl<D: ProcessorDecorator + ?Sized> DecoratorCapabilities for D {
    fn supported_resource_types(&self) -> Vec<ResourceType> {
        supported_types(self.supported_resource_type())
    }

    fn original_decorated_object(&self) -> &dyn Processor {
        original_decorated_object(self.decorated_object())
    }
}

/// Unwrap `processor` until reaching one that decorates nothing.
///
/// Identity on a processor that is not a decorator. Chains are assumed
/// acyclic; the walk stops after [`MAX_DECORATION_DEPTH`] levels and returns
/// the processor reached at that point.
pub fn original_decorated_object(processor: &dyn Processor) -> &dyn Processor {
    let mut current = processor;
    let mut depth = 0;

    while let Some(decorator) = current.as_decorator() {
        if depth == MAX_DECORATION_DEPTH {
            DecorationDepthExceeded {
                processor: current.name(),
                max_depth: MAX_DECORATION_DEPTH,
            }
            .log();
            break;
        }
        current = decorator.decorated_object();
        depth += 1;
    }

    current
}

/// Whether two references point at the same processor instance.
pub fn same_processor(a: &dyn Processor, b: &dyn Processor) -> bool {
    std::ptr::addr_eq(a, b)
}
