use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// A line of puzzle input that does not have the expected shape
#[derive(Debug, Error, Diagnostic)]
#[error("failed to parse puzzle input on line {line}: expected {expected}")]
#[diagnostic(code(parse::error))]
pub struct ParseError {
    #[source_code]
    src: String,
    #[label("does not match")]
    span: SourceSpan,
    line: usize,
    expected: &'static str,
}

impl ParseError {
    /// Labels the rest of the line starting at `offset` in `src`
    pub fn new(src: &str, offset: usize, expected: &'static str) -> Self {
        let offset = offset.min(src.len());
        let len = src[offset..]
            .find(['\r', '\n'])
            .unwrap_or(src.len() - offset);
        let line = src[..offset].matches('\n').count() + 1;

        Self {
            src: src.to_string(),
            span: (offset, len).into(),
            line,
            expected,
        }
    }

    /// Converts a nom failure on `parsed`, a prefix of `src`, into a labelled error
    pub fn from_nom(
        src: &str,
        parsed: &str,
        err: nom::Err<nom::error::Error<&str>>,
        expected: &'static str,
    ) -> Self {
        let rest = match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
            nom::Err::Incomplete(_) => "",
        };
        // a failure right after a line ending belongs to the next line
        let rest = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest);
        Self::new(src, parsed.len().saturating_sub(rest.len()), expected)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}
