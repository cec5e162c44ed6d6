// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use super::{read_text, write_text};
use crate::errors::ProcessorResult;
use crate::model::Resource;
use crate::traits::Processor;

/// Ensures non-empty output ends with exactly one newline.
///
/// Carries no capability declaration, so it runs on every resource type and
/// regardless of the minimize flag.
pub struct TrailingNewlineProcessor;

impl TrailingNewlineProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TrailingNewlineProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Processor for TrailingNewlineProcessor {
    async fn process(
        &self,
        _resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        let input = read_text(reader).await?;
        let trimmed = input.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            return write_text(writer, "").await;
        }
        write_text(writer, &format!("{}\n", trimmed)).await
    }

    fn name(&self) -> &'static str {
        "trailing_newline"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
