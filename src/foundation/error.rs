/// Convenience result type used across sirds.
pub type SirdsResult<T> = Result<T, SirdsError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum SirdsError {
    /// Direct cell access with a coordinate outside the field.
    #[error("cell ({row}, {col}) is out of range for a {height}x{width} dot field")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Field height in rows.
        height: usize,
        /// Field width in columns.
        width: usize,
    },

    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while writing frames to an output sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Failures of the live display surface.
    #[error("display error: {0}")]
    Display(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SirdsError {
    /// Build a [`SirdsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SirdsError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SirdsError::Display`] value.
    pub fn display(msg: impl Into<String>) -> Self {
        Self::Display(msg.into())
    }

    /// `true` for [`SirdsError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
