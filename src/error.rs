#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FluentError {
    /// A count argument was negative or did not fit in `usize`.
    #[error("Expected a non-negative count, got {count}.")]
    InvalidCount { count: String },

    #[error("A function is required.")]
    MissingFunction,

    /// A single item was found where an iterable was required.
    #[error("Item at position {position} is not iterable.")]
    NotIterable { position: usize },

    #[error("Cannot reduce an empty sequence without an initial value.")]
    EmptyReduce,

    #[error("Expected {expected} arguments, got {found}.")]
    ArityMismatch { expected: usize, found: usize },
}

impl FluentError {
    pub(crate) fn invalid_count(count: impl ToString) -> Self {
        let err = FluentError::InvalidCount {
            count: count.to_string(),
        };
        log::debug!("{}", err);
        err
    }

    pub(crate) fn not_iterable(position: usize) -> Self {
        let err = FluentError::NotIterable { position };
        log::debug!("{}", err);
        err
    }

    pub(crate) fn arity_mismatch(expected: usize, found: usize) -> Self {
        let err = FluentError::ArityMismatch { expected, found };
        log::debug!("{}", err);
        err
    }
}

pub type Result<T> = std::result::Result<T, FluentError>;
