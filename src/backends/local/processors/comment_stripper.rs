// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use super::{read_text, write_text};
use crate::capabilities::{DeclaredCapabilities, StaticDeclaration};
use crate::errors::ProcessorResult;
use crate::model::Resource;
use crate::traits::Processor;

/// Removes `/* ... */` block comments from scripts and stylesheets.
///
/// Comments opening with `/*!` are license notices and are kept. An
/// unterminated comment is left in place.
pub struct CommentStripperProcessor;

impl CommentStripperProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommentStripperProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclaredCapabilities for CommentStripperProcessor {
    const DECLARATION: StaticDeclaration = StaticDeclaration::any().minimize();
}

pub fn strip_block_comments(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/*") {
        let (before, comment) = rest.split_at(start);
        output.push_str(before);

        match comment[2..].find("*/") {
            Some(end) => {
                let comment_len = end + 4;
                if comment.starts_with("/*!") {
                    output.push_str(&comment[..comment_len]);
                }
                rest = &comment[comment_len..];
            }
            None => {
                rest = comment;
                break;
            }
        }
    }

    output.push_str(rest);
    output
}

#[async_trait]
impl Processor for CommentStripperProcessor {
    async fn process(
        &self,
        _resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        let input = read_text(reader).await?;
        write_text(writer, &strip_block_comments(&input)).await
    }

    fn name(&self) -> &'static str {
        "comment_stripper"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_block_comments_table_driven() {
        let cases = vec![
            ("no comments", "a { color: red; }", "a { color: red; }"),
            ("single comment", "a /* x */{ }", "a { }"),
            ("two comments", "/* a */x/* b */y", "xy"),
            ("license kept", "/*! MIT */var a;/* drop */", "/*! MIT */var a;"),
            ("unterminated", "var a; /* open", "var a; /* open"),
            ("empty comment", "a/**/b", "ab"),
        ];

        for (name, input, expected) in cases {
            assert_eq!(strip_block_comments(input), expected, "case: {}", name);
        }
    }

    #[tokio::test]
    async fn test_process_rejects_invalid_utf8() {
        let processor = CommentStripperProcessor::new();
        let mut output = Vec::new();
        let result = processor
            .process(None, &mut &[0xffu8, 0xfe][..], &mut output)
            .await;

        assert!(matches!(result, Err(crate::errors::ProcessorError::InvalidUtf8(_))));
    }
}
