//! A derived buffer layered over [`OwningBuffer`].
//!
//! [`ExtendedBuffer`] adds no state. It exists so that construction and
//! release ordering across layers is observable: the base is built first
//! and released last, whichever handle the buffer is dropped through.

use std::ops::{Index, IndexMut};

use lifespan_core::{BufferError, BufferKind, LifecycleEvent, SharedSink};

use crate::buffer::{Buffer, OwningBuffer};
use crate::config::BufferConfig;

/// An [`OwningBuffer`] with its own construction and release notifications.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lifespan_buffer::{Buffer, ExtendedBuffer};
/// use lifespan_core::ChannelSink;
///
/// let (sink, rx) = ChannelSink::unbounded();
/// let buf: Box<dyn Buffer> = Box::new(ExtendedBuffer::new(3, Arc::new(sink)).unwrap());
/// buf.release();
///
/// let lines: Vec<String> = rx.try_iter().map(|e| e.to_string()).collect();
/// assert_eq!(lines, [
///     "Constructed Array of size 3",
///     "SpecialArray constructor called",
///     "SpecialArray destructor called",
///     "Array destroyed",
/// ]);
/// ```
#[derive(Debug)]
pub struct ExtendedBuffer {
    /// Dropped after `ExtendedBuffer::drop` returns.
    base: OwningBuffer,
}

impl ExtendedBuffer {
    /// Allocate an extended buffer of `len` zeroed elements.
    ///
    /// # Errors
    ///
    /// Returns `Err(BufferError::AllocationFailed)` if the base cannot be
    /// allocated; neither layer reports construction in that case.
    pub fn new(len: usize, sink: SharedSink) -> Result<Self, BufferError> {
        Self::with_config(len, &BufferConfig::default(), sink)
    }

    /// Allocate an extended buffer under `config`'s budget.
    pub fn with_config(
        len: usize,
        config: &BufferConfig,
        sink: SharedSink,
    ) -> Result<Self, BufferError> {
        let base = OwningBuffer::with_config(len, config, sink)?;
        let instance = base.instance_id();
        tracing::debug!(instance = %instance, kind = %BufferKind::Extended, len, "buffer constructed");
        base.notify(LifecycleEvent::constructed(
            instance,
            BufferKind::Extended,
            len,
        ));
        Ok(Self { base })
    }

    /// Release the buffer now, consuming it.
    pub fn release(self) {
        drop(self);
    }
}

impl Buffer for ExtendedBuffer {
    fn kind(&self) -> BufferKind {
        BufferKind::Extended
    }

    fn base(&self) -> &OwningBuffer {
        &self.base
    }

    fn base_mut(&mut self) -> &mut OwningBuffer {
        &mut self.base
    }
}

impl Index<usize> for ExtendedBuffer {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.base[index]
    }
}

impl IndexMut<usize> for ExtendedBuffer {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        &mut self.base[index]
    }
}

impl Drop for ExtendedBuffer {
    fn drop(&mut self) {
        let instance = self.base.instance_id();
        tracing::debug!(instance = %instance, kind = %BufferKind::Extended, "buffer released");
        self.base
            .notify(LifecycleEvent::released(instance, BufferKind::Extended));
    }
}
