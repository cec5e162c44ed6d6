// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod resource;

pub use resource::{Resource, ResourceType};
