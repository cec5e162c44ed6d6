// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! All checks run and every problem is reported, in this order:
//!
//! 1. **Uniqueness**: processor ids are unique across pre- and post-processors
//! 2. **Constructibility**: every processor names a known implementation and
//!    a `lazy` decorator only appears innermost

use std::collections::HashSet;

use crate::backends::local::LocalProcessorFactory;
use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{ValidationCompleted, ValidationIssue, ValidationStarted};
use crate::observability::messages::StructuredLog;

/// Validate a configuration without building any processor.
///
/// # Returns
///
/// * `Ok(())` - every processor can be built
/// * `Err(Vec<ValidationError>)` - all problems found
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let processor_count = config.processors().count();
    ValidationStarted { processor_count }.log();

    let mut errors = validate_unique_ids(config);
    errors.extend(
        config
            .processors()
            .filter_map(|processor| LocalProcessorFactory::validate(processor).err())
            .map(ValidationError::InvalidProcessor),
    );

    for error in &errors {
        ValidationIssue { error: error as &dyn std::error::Error }.log();
    }
    ValidationCompleted {
        processor_count,
        error_count: errors.len(),
    }
    .log();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unique_ids(config: &Config) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for processor in config.processors() {
        let id = processor.id.as_str();
        if !seen.insert(id) && reported.insert(id) {
            errors.push(ValidationError::DuplicateProcessorId {
                processor_id: id.to_string(),
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DecoratorKind, ProcessorConfig};
    use crate::errors::FactoryError;

    fn processor(id: &str, impl_name: Option<&str>, decorators: Vec<DecoratorKind>) -> ProcessorConfig {
        ProcessorConfig {
            id: id.to_string(),
            impl_: impl_name.map(str::to_string),
            decorators,
        }
    }

    fn config(pre: Vec<ProcessorConfig>, post: Vec<ProcessorConfig>) -> Config {
        Config {
            minimize: true,
            pre_processors: pre,
            post_processors: post,
        }
    }

    #[test]
    fn test_validate_config_table_driven() {
        struct TestCase {
            name: &'static str,
            config: Config,
            expected: Result<(), Vec<ValidationError>>,
        }

        let cases = vec![
            TestCase {
                name: "empty",
                config: config(vec![], vec![]),
                expected: Ok(()),
            },
            TestCase {
                name: "valid with decorators",
                config: config(
                    vec![processor("strip", Some("comment_stripper"), vec![DecoratorKind::Benchmark])],
                    vec![processor(
                        "css",
                        Some("css_minifier"),
                        vec![DecoratorKind::Lazy, DecoratorKind::Caching],
                    )],
                ),
                expected: Ok(()),
            },
            TestCase {
                name: "duplicate across phases reported once",
                config: config(
                    vec![
                        processor("a", Some("comment_stripper"), vec![]),
                        processor("a", Some("comment_stripper"), vec![]),
                    ],
                    vec![processor("a", Some("css_minifier"), vec![])],
                ),
                expected: Err(vec![ValidationError::DuplicateProcessorId {
                    processor_id: "a".to_string(),
                }]),
            },
            TestCase {
                name: "every problem reported",
                config: config(
                    vec![processor("missing", None, vec![])],
                    vec![processor(
                        "late_lazy",
                        Some("css_minifier"),
                        vec![DecoratorKind::Caching, DecoratorKind::Lazy],
                    )],
                ),
                expected: Err(vec![
                    ValidationError::InvalidProcessor(FactoryError::MissingImplementation {
                        processor_id: "missing".to_string(),
                    }),
                    ValidationError::InvalidProcessor(FactoryError::LazyNotInnermost {
                        processor_id: "late_lazy".to_string(),
                        position: 1,
                    }),
                ]),
            },
        ];

        for case in cases {
            assert_eq!(validate_config(&case.config), case.expected, "case: {}", case.name);
        }
    }
}
