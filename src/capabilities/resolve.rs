// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Two-tier capability resolution for any processor, decorated or not.
//!
//! A decorator forwards whatever its resolution hooks return. Any other
//! processor that reports its own capabilities wins outright. Otherwise the
//! static declaration of its concrete type is used, and a processor with
//! neither applies to every resource type and is not minimize-eligible.
//! Nothing here is cached; every call walks the current decoration chain.

use serde::Serialize;

use super::CapabilityRegistry;
use crate::model::{Resource, ResourceType};
use crate::traits::{MinimizeAware, Processor, SupportedResourceTypeAware};

/// Supported type of `processor`; `None` means every type.
pub fn supported_type_for(registry: &CapabilityRegistry, processor: &dyn Processor) -> Option<ResourceType> {
    if let Some(decorator) = processor.as_decorator() {
        return decorator.supported_resource_type();
    }
    if let Some(aware) = processor.as_supported_type_aware() {
        return aware.supported_resource_type();
    }
    registry
        .lookup(processor)
        .and_then(|declaration| declaration.supported_type)
}

pub fn minimize_for(registry: &CapabilityRegistry, processor: &dyn Processor) -> bool {
    if let Some(decorator) = processor.as_decorator() {
        return decorator.is_minimize();
    }
    if let Some(aware) = processor.as_minimize_aware() {
        return aware.is_minimize();
    }
    registry
        .lookup(processor)
        .map(|declaration| declaration.minimize)
        .unwrap_or(false)
}

/// Full set when `supported_type` is `None`, otherwise the singleton.
pub fn supported_types(supported_type: Option<ResourceType>) -> Vec<ResourceType> {
    match supported_type {
        Some(resource_type) => vec![resource_type],
        None => ResourceType::ALL.to_vec(),
    }
}

/// Resolved capabilities of one processor at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessorCapabilities {
    pub supported_type: Option<ResourceType>,
    pub minimize: bool,
}

impl ProcessorCapabilities {
    pub fn resolve(registry: &CapabilityRegistry, processor: &dyn Processor) -> Self {
        Self {
            supported_type: supported_type_for(registry, processor),
            minimize: minimize_for(registry, processor),
        }
    }

    /// Never empty.
    pub fn supported_resource_types(&self) -> Vec<ResourceType> {
        supported_types(self.supported_type)
    }

    pub fn supports(&self, resource_type: ResourceType) -> bool {
        self.supported_type.map_or(true, |supported| supported == resource_type)
    }

    /// Whether a processor with these capabilities should run against a
    /// resource of `resource_type` for which minimization is `minimize`.
    pub fn is_enabled_for(&self, resource_type: ResourceType, minimize: bool) -> bool {
        self.supports(resource_type) && (!self.minimize || minimize)
    }

    pub fn is_enabled_for_resource(&self, resource: &Resource) -> bool {
        self.is_enabled_for(resource.resource_type, resource.minimize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::{CssMinifierProcessor, TrailingNewlineProcessor};
    use crate::backends::stub::{ReportingProcessor, StubProcessor};
    use crate::capabilities::StaticDeclaration;

    #[test]
    fn test_reported_capabilities_override_static_declaration() {
        let mut registry = CapabilityRegistry::new();
        registry.register::<ReportingProcessor>(StaticDeclaration::of(ResourceType::Css).minimize());

        let processor = ReportingProcessor::new(Some(ResourceType::Js), false);
        let capabilities = ProcessorCapabilities::resolve(&registry, &processor);

        assert_eq!(capabilities.supported_type, Some(ResourceType::Js));
        assert!(!capabilities.minimize);
    }

    #[test]
    fn test_reported_any_type_overrides_declared_type() {
        let mut registry = CapabilityRegistry::new();
        registry.register::<ReportingProcessor>(StaticDeclaration::of(ResourceType::Css));

        let processor = ReportingProcessor::new(None, true);
        assert_eq!(supported_type_for(&registry, &processor), None);
        assert!(minimize_for(&registry, &processor));
    }

    #[test]
    fn test_static_declaration_used_without_report() {
        let registry = CapabilityRegistry::with_builtins();
        let capabilities = ProcessorCapabilities::resolve(&registry, &CssMinifierProcessor::new());

        assert_eq!(capabilities.supported_type, Some(ResourceType::Css));
        assert!(capabilities.minimize);
        assert_eq!(capabilities.supported_resource_types(), vec![ResourceType::Css]);
    }

    #[test]
    fn test_fallback_without_report_or_declaration() {
        let registry = CapabilityRegistry::with_builtins();

        for processor in [
            &TrailingNewlineProcessor::new() as &dyn Processor,
            &StubProcessor::new("stub") as &dyn Processor,
        ] {
            let capabilities = ProcessorCapabilities::resolve(&registry, processor);
            assert_eq!(capabilities.supported_type, None, "processor: {}", processor.name());
            assert!(!capabilities.minimize, "processor: {}", processor.name());
            assert_eq!(capabilities.supported_resource_types(), ResourceType::ALL.to_vec());
        }
    }

    #[test]
    fn test_is_enabled_for_table_driven() {
        struct TestCase {
            name: &'static str,
            capabilities: ProcessorCapabilities,
            resource_type: ResourceType,
            minimize: bool,
            expected: bool,
        }

        let css_minimizer = ProcessorCapabilities {
            supported_type: Some(ResourceType::Css),
            minimize: true,
        };
        let any_plain = ProcessorCapabilities {
            supported_type: None,
            minimize: false,
        };

        let test_cases = vec![
            TestCase {
                name: "matching type with minimize requested",
                capabilities: css_minimizer,
                resource_type: ResourceType::Css,
                minimize: true,
                expected: true,
            },
            TestCase {
                name: "matching type without minimize",
                capabilities: css_minimizer,
                resource_type: ResourceType::Css,
                minimize: false,
                expected: false,
            },
            TestCase {
                name: "wrong type",
                capabilities: css_minimizer,
                resource_type: ResourceType::Js,
                minimize: true,
                expected: false,
            },
            TestCase {
                name: "any type ignores minimize",
                capabilities: any_plain,
                resource_type: ResourceType::Js,
                minimize: false,
                expected: true,
            },
        ];

        for case in test_cases {
            assert_eq!(
                case.capabilities.is_enabled_for(case.resource_type, case.minimize),
                case.expected,
                "case: {}",
                case.name
            );
        }
    }
}
