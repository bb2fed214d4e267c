//! Error type for the demonstration programs.

use std::error::Error;
use std::fmt;
use std::io;

use lifespan_core::BufferError;

/// Anything that can stop a demonstration sequence.
#[derive(Debug)]
pub enum DemoError {
    /// A buffer could not be created or accessed.
    Buffer(BufferError),
    /// Writing to the console failed.
    Io(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(err) => write!(f, "buffer error: {err}"),
            Self::Io(err) => write!(f, "console write failed: {err}"),
        }
    }
}

impl Error for DemoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Buffer(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<BufferError> for DemoError {
    fn from(err: BufferError) -> Self {
        Self::Buffer(err)
    }
}

impl From<io::Error> for DemoError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
