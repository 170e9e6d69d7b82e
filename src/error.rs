use thiserror::Error;

use crate::tuple::MAX_ARITY;

/// Errors produced by tuple construction and statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TupleError {
    /// A statistic that needs at least one element was asked of the
    /// empty tuple.
    #[error("empty tuple has no elements")]
    Empty,

    /// Runtime construction was given more values than any supported arity
    /// holds. Permanent input-validation failure, never transient.
    #[error("arity {0} exceeds the supported maximum of {MAX_ARITY}")]
    UnsupportedArity(usize),
}
