// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Upper bound on decorator layers walked while unwrapping a chain
pub const MAX_DECORATION_DEPTH: usize = 1024;
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Whether groups are minimized when the config does not say
pub const DEFAULT_MINIMIZE: bool = true;
/// Inserted between resources when a group is concatenated
pub const GROUP_SEPARATOR: &str = "\n";
