// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor capability metadata: which resource types a processor applies
//! to and whether it is minimize-eligible.
//!
//! * `registry` - static declarations keyed by concrete processor type
//! * `resolve` - reported-over-declared resolution for a single processor

mod registry;
mod resolve;

pub use registry::{CapabilityRegistry, DeclaredCapabilities, StaticDeclaration};
pub use resolve::{minimize_for, supported_type_for, supported_types, ProcessorCapabilities};
