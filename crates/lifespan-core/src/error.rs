//! Error types for buffer operations.

use std::error::Error;
use std::fmt;

/// Errors that can occur while creating or accessing a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The element storage could not be allocated. Fatal for the
    /// construction that requested it; no partial buffer exists.
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
        /// Largest element count the allocation budget permits.
        limit: usize,
    },
    /// An index outside `[0, len)` was used for element access.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of elements in the buffer.
        len: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested, limit } => {
                write!(
                    f,
                    "buffer allocation failed: requested {requested} elements, limit {limit} elements"
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for buffer of length {len}")
            }
        }
    }
}

impl Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = BufferError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for buffer of length 3");

        let err = BufferError::AllocationFailed {
            requested: 10,
            limit: 4,
        };
        assert!(err.to_string().contains("requested 10"));
        assert!(err.to_string().contains("limit 4"));
    }
}
