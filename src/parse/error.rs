use thiserror::Error;

/// Errors produced when parsing rule-table text.
///
/// Both variants name the offending line (1-indexed) so a host can point
/// the author at it. An unrecognized operator gets its own kind, distinct
/// from other malformed input, so hosts can report it separately.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed rule on line {line}: {reason} ('{raw}')")]
    MalformedRule {
        line: usize,
        raw: String,
        reason: String,
    },

    #[error("invalid operator '{token}' on line {line}")]
    InvalidOperator { line: usize, token: String },
}

impl ParseError {
    /// The 1-indexed line the error refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedRule { line, .. } | ParseError::InvalidOperator { line, .. } => {
                *line
            }
        }
    }
}
