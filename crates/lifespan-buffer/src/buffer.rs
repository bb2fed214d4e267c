//! The [`Buffer`] capability and its base implementation, [`OwningBuffer`].

use std::ops::{Index, IndexMut};

use lifespan_core::{BufferError, BufferKind, InstanceId, LifecycleEvent, SharedSink};

use crate::config::BufferConfig;

/// Common capability of every buffer variant.
///
/// Each variant is built on an [`OwningBuffer`] and exposes it through
/// [`base`](Buffer::base); element access is provided on top of that.
///
/// # Object Safety
///
/// Designed for use as `Box<dyn Buffer>`. Dropping the box runs the
/// concrete variant's release logic and then its base's, exactly as
/// dropping the concrete value would.
pub trait Buffer: Send + Sync + 'static {
    /// The outermost layer of this buffer.
    fn kind(&self) -> BufferKind;

    /// The owning layer that holds the element storage.
    fn base(&self) -> &OwningBuffer;

    /// Mutable access to the owning layer.
    fn base_mut(&mut self) -> &mut OwningBuffer;

    /// Identity shared by every layer of this buffer.
    fn instance_id(&self) -> InstanceId {
        self.base().instance_id()
    }

    /// Number of elements, fixed at construction.
    fn len(&self) -> usize {
        self.base().len()
    }

    /// Whether the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at `index`.
    ///
    /// Returns `Err(BufferError::IndexOutOfRange)` if `index >= len()`.
    fn get(&self, index: usize) -> Result<i32, BufferError> {
        self.base().get(index)
    }

    /// Overwrite the element at `index`.
    ///
    /// Returns `Err(BufferError::IndexOutOfRange)` if `index >= len()`;
    /// the buffer is unchanged in that case.
    fn set(&mut self, index: usize, value: i32) -> Result<(), BufferError> {
        self.base_mut().set(index, value)
    }

    /// All elements in index order.
    fn as_slice(&self) -> &[i32] {
        self.base().as_slice()
    }

    /// All elements in index order, mutably.
    fn as_mut_slice(&mut self) -> &mut [i32] {
        self.base_mut().as_mut_slice()
    }

    /// Release the buffer now.
    ///
    /// Equivalent to dropping the box; consuming it makes a second release
    /// unrepresentable.
    fn release(self: Box<Self>) {
        drop(self);
    }
}

impl Index<usize> for dyn Buffer {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for dyn Buffer {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        &mut self.as_mut_slice()[index]
    }
}

/// A fixed-length, zero-initialised run of `i32` that owns its storage.
///
/// The storage is allocated once at construction and freed once when the
/// buffer is dropped. Construction and release are reported to the sink
/// passed at construction.
///
/// # Examples
///
/// ```
/// use lifespan_buffer::OwningBuffer;
/// use lifespan_core::NullSink;
///
/// let mut buf = OwningBuffer::new(4, NullSink::shared()).unwrap();
/// buf.set(2, 9).unwrap();
/// assert_eq!(buf.as_slice(), &[0, 0, 9, 0]);
/// assert!(buf.get(4).is_err());
/// ```
pub struct OwningBuffer {
    instance: InstanceId,
    /// Element storage. Emptied exactly once, in `drop`.
    elements: Vec<i32>,
    sink: SharedSink,
}

impl OwningBuffer {
    /// Allocate a buffer of `len` zeroed elements under the default budget.
    ///
    /// # Errors
    ///
    /// Returns `Err(BufferError::AllocationFailed)` if the storage cannot
    /// be allocated. No notification is emitted in that case.
    pub fn new(len: usize, sink: SharedSink) -> Result<Self, BufferError> {
        Self::with_config(len, &BufferConfig::default(), sink)
    }

    /// Allocate a buffer of `len` zeroed elements under `config`'s budget.
    ///
    /// # Errors
    ///
    /// Returns `Err(BufferError::AllocationFailed)` if `len` exceeds
    /// `config.max_len` or the allocator refuses the request.
    pub fn with_config(
        len: usize,
        config: &BufferConfig,
        sink: SharedSink,
    ) -> Result<Self, BufferError> {
        let elements = allocate(len, config)?;
        let buffer = Self {
            instance: InstanceId::next(),
            elements,
            sink,
        };
        tracing::debug!(instance = %buffer.instance, kind = %BufferKind::Owning, len, "buffer constructed");
        buffer.notify(LifecycleEvent::constructed(
            buffer.instance,
            BufferKind::Owning,
            len,
        ));
        Ok(buffer)
    }

    /// Identity of this buffer.
    pub fn instance_id(&self) -> InstanceId {
        self.instance
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<i32, BufferError> {
        self.elements
            .get(index)
            .copied()
            .ok_or(BufferError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), BufferError> {
        let len = self.len();
        let slot = self
            .elements
            .get_mut(index)
            .ok_or(BufferError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// All elements in index order.
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    /// All elements in index order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.elements
    }

    /// Release the buffer now, consuming it.
    pub fn release(self) {
        drop(self);
    }

    /// Report an event to this buffer's sink.
    pub(crate) fn notify(&self, event: LifecycleEvent) {
        self.sink.record(&event);
    }
}

/// Reserve exactly `len` elements and zero them.
fn allocate(len: usize, config: &BufferConfig) -> Result<Vec<i32>, BufferError> {
    let failed = BufferError::AllocationFailed {
        requested: len,
        limit: config.max_len,
    };
    if !config.permits(len) {
        tracing::warn!(requested = len, limit = config.max_len, "buffer exceeds allocation budget");
        return Err(failed);
    }
    let mut elements = Vec::new();
    if let Err(err) = elements.try_reserve_exact(len) {
        tracing::warn!(requested = len, error = %err, "buffer allocation refused");
        return Err(failed);
    }
    elements.resize(len, 0);
    Ok(elements)
}

impl Buffer for OwningBuffer {
    fn kind(&self) -> BufferKind {
        BufferKind::Owning
    }

    fn base(&self) -> &OwningBuffer {
        self
    }

    fn base_mut(&mut self) -> &mut OwningBuffer {
        self
    }
}

impl Index<usize> for OwningBuffer {
    type Output = i32;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &i32 {
        &self.elements[index]
    }
}

impl IndexMut<usize> for OwningBuffer {
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        &mut self.elements[index]
    }
}

impl Drop for OwningBuffer {
    fn drop(&mut self) {
        // Free the storage before announcing it.
        let len = std::mem::take(&mut self.elements).len();
        tracing::debug!(instance = %self.instance, kind = %BufferKind::Owning, len, "buffer released");
        self.notify(LifecycleEvent::released(self.instance, BufferKind::Owning));
    }
}

impl std::fmt::Debug for OwningBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwningBuffer")
            .field("instance", &self.instance)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}
