use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::config::ConfigError;

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Debug, Error, Diagnostic)]
pub enum ChatError {
    #[error("malformed script: {0}")]
    #[diagnostic(
        code("chat.malformed_script"),
        help("every message sender must be a declared participant")
    )]
    MalformedScript(String),
    #[error("malformed timeline: {0}")]
    #[diagnostic(
        code("chat.malformed_timeline"),
        help("recompile the script instead of editing a serialized timeline")
    )]
    MalformedTimeline(String),
    #[error("resource limit exceeded: {0}")]
    #[diagnostic(code("chat.resource_limit"))]
    ResourceLimit(String),
    #[error("serialization error: {message}")]
    #[diagnostic(code("chat.serialization"))]
    Serialization {
        message: String,
        #[source_code]
        src: String,
        #[label("here")]
        span: SourceSpan,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

impl ChatError {
    /// Builds a `Serialization` error pointing at the byte where `serde_json` gave up.
    pub(crate) fn from_json(input: &str, err: &serde_json::Error) -> Self {
        let (offset, length) = json_error_span(input, err);
        ChatError::Serialization {
            message: err.to_string(),
            src: input.to_string(),
            span: (offset, length).into(),
        }
    }
}

fn json_error_span(input: &str, error: &serde_json::Error) -> (usize, usize) {
    let line = error.line();
    let column = error.column();
    if line == 0 || column == 0 {
        return (0, 1);
    }
    let mut current_line = 1usize;
    let mut offset = 0usize;
    for chunk in input.split_inclusive('\n') {
        if current_line == line {
            let column_index = column.saturating_sub(1);
            let byte_index = chunk
                .char_indices()
                .nth(column_index)
                .map(|(idx, _)| idx)
                .unwrap_or(chunk.len().saturating_sub(1));
            offset += byte_index;
            return (offset, 1);
        }
        offset += chunk.len();
        current_line += 1;
    }
    (input.len().saturating_sub(1), 1)
}
