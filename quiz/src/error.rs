//! The error type shared by the generator and the TeX formatter.

use thiserror::Error;

/// Everything that can go wrong when generating a system or formatting an
/// array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The arguments were malformed, e.g. duplicate variable names, an empty
    /// range or an array with more than two dimensions.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Every sampled coefficient matrix was singular.
    #[error("no non-singular system found after {attempts} attempts")]
    Unsolvable {
        /// How many systems were sampled before giving up.
        attempts: usize,
    },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Was the input rejected before any sampling happened?
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Did the generator run out of attempts?
    pub fn is_unsolvable(&self) -> bool {
        matches!(self, Self::Unsolvable { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
