// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for processor instantiation from configuration.

use std::error::Error;
use std::fmt;

/// Errors that can occur while turning a processor config into a chain
#[derive(Debug, Clone, PartialEq)]
pub enum FactoryError {
    /// The processor config has no `impl_` field
    MissingImplementation { processor_id: String },

    /// The `impl_` field names no known local processor
    UnknownImplementation {
        processor_id: String,
        implementation: String,
    },

    /// `lazy` was requested somewhere other than the innermost position
    LazyNotInnermost { processor_id: String, position: usize },
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryError::MissingImplementation { processor_id } => {
                write!(f, "Local processor '{}' missing 'impl_' field", processor_id)
            }
            FactoryError::UnknownImplementation {
                processor_id,
                implementation,
            } => {
                write!(
                    f,
                    "Unknown local processor implementation '{}' for processor '{}'",
                    implementation, processor_id
                )
            }
            FactoryError::LazyNotInnermost {
                processor_id,
                position,
            } => {
                write!(
                    f,
                    "Processor '{}' lists 'lazy' at decorator position {}; it must come first",
                    processor_id, position
                )
            }
        }
    }
}

impl Error for FactoryError {}
