// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod factory;
mod processor;

pub use config::{ConfigError, ValidationError};
pub use factory::FactoryError;
pub use processor::{ProcessorError, ProcessorResult};
