//! Benchmark fixtures for the lifespan workspace.
//!
//! - [`mixed_shapes`]: a deterministic heterogeneous `Box<dyn Shape>` list
//! - [`mixed_buffers`]: owning and extended buffers behind `Box<dyn Buffer>`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifespan_buffer::{Buffer, ExtendedBuffer, OwningBuffer};
use lifespan_core::{BufferError, SharedSink};
use lifespan_shape::{Circle, Rectangle, Shape};

/// Build `count` shapes alternating rectangle and circle with varying sizes.
pub fn mixed_shapes(count: usize) -> Vec<Box<dyn Shape>> {
    (0..count)
        .map(|i| {
            let k = (i % 17) as f32 + 1.0;
            if i % 2 == 0 {
                Box::new(Rectangle::new(k, k * 0.5)) as Box<dyn Shape>
            } else {
                Box::new(Circle::new(k)) as Box<dyn Shape>
            }
        })
        .collect()
}

/// Build `count` buffers of `len` elements, every third one extended.
pub fn mixed_buffers(
    count: usize,
    len: usize,
    sink: &SharedSink,
) -> Result<Vec<Box<dyn Buffer>>, BufferError> {
    (0..count)
        .map(|i| -> Result<Box<dyn Buffer>, BufferError> {
            if i % 3 == 0 {
                Ok(Box::new(ExtendedBuffer::new(len, sink.clone())?))
            } else {
                Ok(Box::new(OwningBuffer::new(len, sink.clone())?))
            }
        })
        .collect()
}
