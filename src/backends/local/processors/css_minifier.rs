// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use super::{read_text, strip_block_comments, write_text};
use crate::capabilities::{DeclaredCapabilities, StaticDeclaration};
use crate::errors::ProcessorResult;
use crate::model::{Resource, ResourceType};
use crate::traits::Processor;

/// Characters around which whitespace carries no meaning in CSS.
const CSS_PUNCTUATION: &[char] = &['{', '}', ':', ';', ','];

/// Whitespace-and-comment CSS minifier.
///
/// Strips comments, collapses whitespace runs, removes whitespace around
/// punctuation and drops the last semicolon of each block.
pub struct CssMinifierProcessor;

impl CssMinifierProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CssMinifierProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclaredCapabilities for CssMinifierProcessor {
    const DECLARATION: StaticDeclaration = StaticDeclaration::of(ResourceType::Css).minimize();
}

pub fn minify_css(input: &str) -> String {
    let without_comments = strip_block_comments(input);
    let mut output = String::with_capacity(without_comments.len());
    let mut pending_space = false;

    for ch in without_comments.chars() {
        if ch.is_whitespace() {
            pending_space = !output.is_empty();
            continue;
        }

        if CSS_PUNCTUATION.contains(&ch) {
            if ch == '}' && output.ends_with(';') {
                output.pop();
            }
            output.push(ch);
        } else {
            let after_punctuation = output.ends_with(CSS_PUNCTUATION);
            if pending_space && !after_punctuation {
                output.push(' ');
            }
            output.push(ch);
        }
        pending_space = false;
    }

    output
}

#[async_trait]
impl Processor for CssMinifierProcessor {
    async fn process(
        &self,
        _resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        let input = read_text(reader).await?;
        write_text(writer, &minify_css(&input)).await
    }

    fn name(&self) -> &'static str {
        "css_minifier"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
