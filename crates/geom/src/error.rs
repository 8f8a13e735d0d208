use thiserror::Error;

/// Returned by the entry points that accept a variable number of values.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentCountError {
    #[error("Incorrect number of arguments: expected {expected}, got {found}.")]
    InvalidArgumentCount {
        expected: &'static str,
        found: usize,
    },
}
