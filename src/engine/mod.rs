// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod chain_runner;

pub use chain_runner::{ChainDescription, ChainRunner, NamedProcessor, Phase};
