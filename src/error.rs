use thiserror::Error;

use crate::parse::ParseError;
use crate::types::EvalError;

/// Unified error type covering parsing, evaluation, and I/O.
///
/// Returned by convenience methods like
/// [`RuleTable::from_file()`](crate::RuleTable::from_file).
#[derive(Debug, Error)]
pub enum ParcelrateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
