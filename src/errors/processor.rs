// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while transforming a resource.
//!
//! Decorators never wrap these: a failure raised by the innermost processor
//! reaches the caller exactly as it was produced.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    /// Reading from the input or writing to the output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A text processor received bytes that are not valid UTF-8.
    #[error("Invalid UTF-8 input: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The transformation itself rejected the input.
    #[error("Processor '{processor}' failed: {message}")]
    Failed { processor: String, message: String },
}

impl ProcessorError {
    pub fn failed(processor: impl Into<String>, message: impl Into<String>) -> Self {
        ProcessorError::Failed {
            processor: processor.into(),
            message: message.into(),
        }
    }
}

pub type ProcessorResult<T> = Result<T, ProcessorError>;
