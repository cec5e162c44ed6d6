// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;     // processor implementations
pub mod capabilities; // capability declarations + resolution
pub mod config;       // config loading + validation
pub mod decorators;   // capability-transparent wrappers
pub mod engine;       // pre/post chain runner
pub mod errors;       // error handling
pub mod model;        // resource types + context
pub mod observability;
pub mod traits;       // processor abstractions
