// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Static capability declarations keyed by concrete processor type.

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::backends::local::{CommentStripperProcessor, CssMinifierProcessor, SemicolonAppenderProcessor};
use crate::model::ResourceType;
use crate::traits::Processor;

/// Capabilities attached to a processor type at registration time.
///
/// The default value is what an undeclared processor resolves to: every
/// resource type, not minimize-eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StaticDeclaration {
    pub supported_type: Option<ResourceType>,
    pub minimize: bool,
}

impl StaticDeclaration {
    pub const fn any() -> Self {
        Self {
            supported_type: None,
            minimize: false,
        }
    }

    pub const fn of(resource_type: ResourceType) -> Self {
        Self {
            supported_type: Some(resource_type),
            minimize: false,
        }
    }

    pub const fn minimize(mut self) -> Self {
        self.minimize = true;
        self
    }
}

/// Declaration carried by a processor type itself.
///
/// Implementing this does nothing on its own; the type still has to be
/// registered with [`CapabilityRegistry::register_declared`].
pub trait DeclaredCapabilities {
    const DECLARATION: StaticDeclaration;
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    type_name: &'static str,
    declaration: StaticDeclaration,
}

/// Lookup table from processor type to its [`StaticDeclaration`].
///
/// Built once, then shared read-only (usually behind an `Arc`) by every
/// decorator and by the pipeline.
///
/// ```
/// use asset_chain::capabilities::{CapabilityRegistry, StaticDeclaration};
/// use asset_chain::backends::local::CssMinifierProcessor;
/// use asset_chain::model::ResourceType;
///
/// let registry = CapabilityRegistry::with_builtins();
/// assert_eq!(
///     registry.lookup_type::<CssMinifierProcessor>(),
///     Some(StaticDeclaration::of(ResourceType::Css).minimize())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapabilityRegistry {
    declarations: HashMap<TypeId, Entry>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the declarations of the built-in local processors.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register_declared::<SemicolonAppenderProcessor>()
            .register_declared::<CssMinifierProcessor>()
            .register_declared::<CommentStripperProcessor>();
        registry
    }

    /// Process-wide shared instance of [`CapabilityRegistry::with_builtins`].
    pub fn builtin() -> Arc<CapabilityRegistry> {
        static BUILTIN: OnceLock<Arc<CapabilityRegistry>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Arc::new(Self::with_builtins()))
            .clone()
    }

    /// Attach `declaration` to processor type `T`, replacing any earlier one.
    pub fn register<T: Processor>(&mut self, declaration: StaticDeclaration) -> &mut Self {
        self.declarations.insert(
            TypeId::of::<T>(),
            Entry {
                type_name: type_name::<T>(),
                declaration,
            },
        );
        self
    }

    pub fn register_declared<T: Processor + DeclaredCapabilities>(&mut self) -> &mut Self {
        self.register::<T>(T::DECLARATION)
    }

    /// Declaration of the concrete type behind `processor`, if any.
    pub fn lookup(&self, processor: &dyn Processor) -> Option<StaticDeclaration> {
        self.declarations
            .get(&processor.as_any().type_id())
            .map(|entry| entry.declaration)
    }

    pub fn lookup_type<T: Processor>(&self) -> Option<StaticDeclaration> {
        self.declarations
            .get(&TypeId::of::<T>())
            .map(|entry| entry.declaration)
    }

    /// Names of the registered processor types, sorted.
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.declarations.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
