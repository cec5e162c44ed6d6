// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod comment_stripper;
pub mod css_minifier;
pub mod semicolon_appender;
pub mod trailing_newline;

pub use comment_stripper::*;
pub use css_minifier::*;
pub use semicolon_appender::*;
pub use trailing_newline::*;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::errors::ProcessorResult;

/// Read the whole input as UTF-8 text.
pub(crate) async fn read_text(reader: &mut (dyn AsyncRead + Unpin + Send)) -> ProcessorResult<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    Ok(String::from_utf8(bytes)?)
}

pub(crate) async fn write_text(writer: &mut (dyn AsyncWrite + Unpin + Send), text: &str) -> ProcessorResult<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
