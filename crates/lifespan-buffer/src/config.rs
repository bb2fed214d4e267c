//! Buffer allocation parameters.

/// Configuration for buffer allocation.
///
/// Bounds how many elements a single buffer may request. A request above
/// the limit fails with `AllocationFailed` exactly as an exhausted allocator
/// would, which also makes allocation failure reproducible in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Maximum element count of a single buffer.
    ///
    /// Default: [`BufferConfig::DEFAULT_MAX_LEN`], the largest `i32` count
    /// whose byte size fits in `isize`.
    pub max_len: usize,
}

impl BufferConfig {
    /// Largest element count the global allocator can ever be asked for.
    pub const DEFAULT_MAX_LEN: usize = isize::MAX as usize / std::mem::size_of::<i32>();

    /// Create a config with an explicit element budget.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: max_len.min(Self::DEFAULT_MAX_LEN),
        }
    }

    /// The element budget expressed in bytes.
    pub fn max_bytes(&self) -> usize {
        self.max_len * std::mem::size_of::<i32>()
    }

    /// Whether a buffer of `len` elements fits the budget.
    pub fn permits(&self, len: usize) -> bool {
        len <= self.max_len
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            max_len: Self::DEFAULT_MAX_LEN,
        }
    }
}
