//! Buffer lifetime demonstration.
//!
//! Prints when buffers are constructed and released: a derived buffer
//! released through a base handle, buffers scoped to blocks, and a derived
//! buffer that lives until the end of the sequence.

use std::io::Write;
use std::sync::Arc;

use lifespan_buffer::{Buffer, ExtendedBuffer, OwningBuffer};
use lifespan_core::{BufferError, ConsoleSink, SharedSink};

use crate::error::DemoError;

/// Create a buffer of 10 elements that is released when this returns.
pub fn create_and_destroy<W: Write + Send + 'static>(
    console: &Arc<ConsoleSink<W>>,
) -> Result<(), BufferError> {
    let _buffer = OwningBuffer::new(10, console.clone())?;
    Ok(())
}

/// Run the full sequence, writing every line to `console`.
pub fn run<W: Write + Send + 'static>(console: &Arc<ConsoleSink<W>>) -> Result<(), DemoError> {
    let sink: SharedSink = console.clone();
    console.write_line("MAIN STARTED")?;

    // Derived buffer behind a base handle.
    let mut arr: Box<dyn Buffer> = Box::new(ExtendedBuffer::new(5, sink.clone())?);
    for i in 0..arr.len() {
        arr.set(i, (i * i) as i32)?;
    }
    for value in arr.as_slice() {
        console.write_line(value)?;
    }
    arr.release();

    {
        let _scoped = OwningBuffer::new(15, sink.clone())?;
    }

    {
        let _scoped = OwningBuffer::new(10, sink.clone())?;
    }

    // Released after MAIN ENDED, when this function returns.
    let special = ExtendedBuffer::new(0, sink)?;
    if special.is_empty() {
        console.write_line("specialArray is empty")?;
    } else {
        console.write_line(format_args!("specialArray size: {}", special.len()))?;
    }

    console.write_line("MAIN ENDED")?;
    Ok(())
}
