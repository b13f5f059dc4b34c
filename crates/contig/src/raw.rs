//! Raw, uninitialised element storage.
//!
//! [`RawStorage`] owns a block of memory sized for a fixed number of
//! elements and nothing more: it never constructs or destroys values, and
//! its drop releases the bytes without running any element destructor.
//! Tracking which slots hold live values is the job of the typed container
//! one layer up.

use std::alloc::{self, Layout};
use std::mem;
use std::ptr::NonNull;

use crate::error::ArrayError;

/// An owned block of uninitialised storage for `capacity` elements of `T`.
///
/// The empty state (`capacity == 0`, and any zero-sized `T`) holds the
/// dangling sentinel pointer and owns no allocation. Otherwise the block
/// spans exactly `capacity * size_of::<T>()` bytes obtained from the
/// global allocator.
///
/// `RawStorage` is deliberately not cloneable: a byte-for-byte duplicate
/// without knowledge of which slots are live would be meaningless.
/// Duplication semantics live in the typed container, where liveness is
/// tracked. Ownership transfers by move; [`mem::take`] yields the original
/// with the empty state left behind.
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
}

// SAFETY: the block is exclusively owned and holds no shared state; it is
// as transferable/shareable across threads as the values it will hold.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    /// The empty state: no allocation, zero capacity.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    /// Acquire storage for `capacity` elements.
    ///
    /// `capacity == 0` (and any zero-sized `T`) yields the empty-block
    /// state without touching the allocator. Layout arithmetic overflow
    /// returns [`ArrayError::CapacityOverflow`]; an allocator refusal
    /// returns [`ArrayError::AllocFailed`].
    pub fn allocate(capacity: usize) -> Result<Self, ArrayError> {
        let layout = Layout::array::<T>(capacity)
            .map_err(|_| ArrayError::CapacityOverflow { elements: capacity })?;
        if layout.size() == 0 {
            // Zero bytes requested: either capacity 0 or a zero-sized T.
            // Slot addresses are the dangling sentinel either way.
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
            });
        }

        // SAFETY: layout has non-zero size, checked above.
        let raw = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            return Err(ArrayError::AllocFailed {
                bytes: layout.size(),
            });
        };
        Ok(Self { ptr, capacity })
    }

    /// Number of element slots in the block.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Base pointer of the block for reads.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Base pointer of the block for writes.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to the slot at `offset`.
    ///
    /// # Safety
    ///
    /// `offset` must be at most `capacity` (one past the end is a valid
    /// address, not a valid slot). Violations are caught by a debug
    /// assertion only.
    pub unsafe fn slot(&mut self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.capacity,
            "slot offset {offset} out of range (capacity {})",
            self.capacity
        );
        // SAFETY: offset <= capacity keeps the result inside, or one past,
        // the owned block. For zero-sized T the add is a no-op on the
        // dangling sentinel.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Exchange ownership of two blocks in O(1). Never fails.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        let layout = Layout::array::<T>(self.capacity)
            .expect("layout was validated when the block was allocated");
        if layout.size() != 0 {
            // SAFETY: a non-zero-sized layout means `allocate` obtained
            // this exact layout from the global allocator. No element
            // destructors run here; the owner destroyed live values first.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }
}
