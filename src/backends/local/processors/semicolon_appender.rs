// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use super::{read_text, write_text};
use crate::capabilities::{DeclaredCapabilities, StaticDeclaration};
use crate::errors::ProcessorResult;
use crate::model::{Resource, ResourceType};
use crate::traits::Processor;

/// Terminates a script with `;` so it can be concatenated safely.
pub struct SemicolonAppenderProcessor;

impl SemicolonAppenderProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SemicolonAppenderProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclaredCapabilities for SemicolonAppenderProcessor {
    const DECLARATION: StaticDeclaration = StaticDeclaration::of(ResourceType::Js);
}

pub fn append_semicolon(input: &str) -> String {
    let trimmed = input.trim_end();
    if trimmed.is_empty() || trimmed.ends_with(';') {
        return input.to_string();
    }
    format!("{};{}", trimmed, &input[trimmed.len()..])
}

#[async_trait]
impl Processor for SemicolonAppenderProcessor {
    async fn process(
        &self,
        _resource: Option<&Resource>,
        reader: &mut (dyn AsyncRead + Unpin + Send),
        writer: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> ProcessorResult<()> {
        let input = read_text(reader).await?;
        write_text(writer, &append_semicolon(&input)).await
    }

    fn name(&self) -> &'static str {
        "semicolon_appender"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_semicolon() {
        assert_eq!(append_semicolon("var a = 1"), "var a = 1;");
        assert_eq!(append_semicolon("var a = 1;"), "var a = 1;");
        assert_eq!(append_semicolon("f()\n\n"), "f();\n\n");
        assert_eq!(append_semicolon("  \n"), "  \n");
        assert_eq!(append_semicolon(""), "");
    }
}
