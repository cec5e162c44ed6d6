// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor implementations.
//!
//! ## Local Backend
//! In-process asset processors, created by name through
//! [`local::LocalProcessorFactory`]:
//! - **comment_stripper**: drops `/* */` comments, keeps `/*!` notices
//! - **css_minifier**: whitespace and comment CSS minification
//! - **semicolon_appender**: terminates scripts before concatenation
//! - **trailing_newline**: normalizes the end of the output
//!
//! ## Stub Backend (Test-Only)
//! Echoing, failing, counting and capability-reporting processors used by
//! unit tests. NOT available in production builds.

pub mod local;
#[cfg(test)]
pub mod stub;
