//! The typed sequence container.
//!
//! [`DynamicArray`] layers value lifetimes on top of [`RawStorage`]: the
//! `len` field splits the block into live slots `[0, len)` and raw slots
//! `[len, capacity)`. Every operation maintains that split, including on
//! every unwind path.
//!
//! # Guarantees
//!
//! - Allocation failures return [`ArrayError`] and leave the container
//!   exactly as it was.
//! - Panics from element code during growth, insertion, cloning, or
//!   resizing unwind with the strong guarantee: no observable change, no
//!   leaked values.
//! - The one deliberate exception is the in-place leg of
//!   [`assign`](DynamicArray::assign), documented there.
//!
//! # Position validity
//!
//! References and indices obtained from the container stay meaningful
//! only until the next operation that reallocates or shifts the sequence
//! (`push`/`insert` that grow, `insert`, `remove`, `resize`, `assign`).

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::error::ArrayError;
use crate::raw::RawStorage;
use crate::relocate::{release_source, relocate_slice, DropRange, Relocate};

/// A contiguous, resizable sequence with amortized O(1) append.
///
/// Slots `[0, len)` hold live values; slots `[len, capacity)` are raw
/// memory. The container dereferences to `[T]`, so indexing, iteration,
/// and the full slice API operate on the live range.
pub struct DynamicArray<T> {
    buf: RawStorage<T>,
    len: usize,
}

// SAFETY: the container exclusively owns its values; sending it sends
// them, sharing it shares them read-only.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T> DynamicArray<T> {
    /// An empty sequence. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawStorage::new(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots the current block can hold.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Exchange the contents of two sequences in O(1). Never fails.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Take the contents, leaving an empty sequence behind.
    ///
    /// This is the observable form of ownership transfer: the source stays
    /// usable afterwards with `len() == 0`.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Remove and return the last element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live a line ago and is now excluded from
        // the live range, so exactly one owner of the value remains.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Remove the element at `index`, shifting everything after it one
    /// slot toward the front, and return it. Order-preserving.
    ///
    /// All positions at or after `index` are invalidated.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "remove index {index} out of bounds (len {})",
            self.len
        );
        // SAFETY: `index < len`, so the slot is live; the shift is a
        // bitwise move within one allocation and the vacated trailing
        // slot leaves the live range before anything can observe it.
        unsafe {
            let base = self.buf.as_mut_ptr();
            let hole = base.add(index);
            let value = ptr::read(hole);
            ptr::copy(hole.add(1), hole, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Deep-copy the sequence. The copy's capacity is exactly `len()`.
    ///
    /// Storage-independent: mutating the copy never affects the original.
    /// Strong guarantee: if a `clone` panics partway, the finished clones
    /// are destroyed and nothing leaks.
    pub fn try_clone(&self) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut copy = RawStorage::allocate(self.len)?;
        let dst: *mut T = copy.as_mut_ptr();
        let mut guard = DropRange {
            base: dst,
            count: 0,
        };
        for (offset, value) in self.iter().enumerate() {
            // SAFETY: `offset < len <= copy.capacity()`, a raw slot.
            unsafe { dst.add(offset).write(value.clone()) };
            guard.count = offset + 1;
        }
        mem::forget(guard);
        Ok(Self {
            buf: copy,
            len: self.len,
        })
    }

    /// Destroy the trailing elements `[new_len, len)`. Caller guarantees
    /// `new_len <= len`.
    fn truncate_to(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.len);
        let old_len = self.len;
        // Shrink first: a panicking destructor must not leave destroyed
        // slots inside the live range.
        self.len = new_len;
        // SAFETY: `[new_len, old_len)` was live and is no longer reachable.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().add(new_len),
                old_len - new_len,
            ));
        }
    }
}

impl<T: Relocate> DynamicArray<T> {
    /// A sequence of `len` value-constructed (default) elements, with
    /// capacity exactly `len`.
    pub fn with_len(len: usize) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        let mut array = Self::new();
        array.resize(len)?;
        Ok(array)
    }

    /// Ensure capacity for at least `new_capacity` elements.
    ///
    /// A no-op when `new_capacity <= capacity()` — zero constructions,
    /// zero destructions. Otherwise allocates a block of exactly
    /// `new_capacity` slots, relocates the live elements per the
    /// [`Relocate`] capability, and swaps the block in. Strong guarantee:
    /// on allocation failure or a duplication panic the container is
    /// untouched and the partial new block is destroyed.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity <= self.buf.capacity() {
            return Ok(());
        }
        let mut grown = RawStorage::allocate(new_capacity)?;
        // SAFETY: `[0, len)` is live in the old block; the new block has
        // at least `len` raw slots and cannot overlap a fresh allocation.
        // A panic in relocate_slice destroys the partial prefix and
        // `grown` frees itself on unwind, leaving `self` intact.
        unsafe {
            relocate_slice(self.buf.as_ptr(), grown.as_mut_ptr(), self.len);
            release_source(self.buf.as_mut_ptr(), self.len);
        }
        self.buf.swap(&mut grown);
        Ok(())
    }

    /// Set the length to `new_len`, value-constructing new trailing
    /// elements or destroying excess ones.
    ///
    /// Growth reserves exactly `new_len` slots first. If a `default()`
    /// call panics, the partially built tail is destroyed and the length
    /// is unchanged (capacity may already have grown).
    pub fn resize(&mut self, new_len: usize) -> Result<(), ArrayError>
    where
        T: Default,
    {
        if new_len > self.buf.capacity() {
            self.reserve(new_len)?;
        }
        if new_len > self.len {
            let tail = self.len;
            // SAFETY: `[tail, new_len)` are raw slots within capacity.
            // The guard unwinds away whatever was built before a panic.
            unsafe {
                let base = self.buf.as_mut_ptr().add(tail);
                let mut guard = DropRange {
                    base,
                    count: 0,
                };
                for offset in 0..new_len - tail {
                    base.add(offset).write(T::default());
                    guard.count = offset + 1;
                }
                mem::forget(guard);
            }
            self.len = new_len;
        } else {
            self.truncate_to(new_len);
        }
        Ok(())
    }

    /// Append an element, growing by doubling when full.
    ///
    /// Returns a reference to the stored element. Strong guarantee.
    pub fn push(&mut self, value: T) -> Result<&mut T, ArrayError> {
        if self.len == self.buf.capacity() {
            self.reserve(self.grown_capacity()?)?;
        }
        let index = self.len;
        // SAFETY: capacity now exceeds `len`, so slot `len` is raw.
        unsafe { self.buf.slot(index).write(value) };
        self.len = index + 1;
        // SAFETY: slot `index` was just made live.
        Ok(unsafe { &mut *self.buf.slot(index) })
    }

    /// Insert an element at `index`, shifting `[index, len)` one slot
    /// toward the end. Order-preserving; returns a reference to the
    /// inserted element, valid until the next reallocating or shifting
    /// operation.
    ///
    /// With spare capacity the shift is a bitwise move within the block.
    /// When full, a doubled block is allocated and the prefix, the new
    /// element, and the suffix are laid down in order; any panic on the
    /// way destroys everything placed in the new block and leaves the
    /// container untouched (strong guarantee).
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, ArrayError> {
        assert!(
            index <= self.len,
            "insert index {index} out of bounds (len {})",
            self.len
        );

        if self.len < self.buf.capacity() {
            // SAFETY: `index <= len < capacity`. The shift is a bitwise
            // move within one allocation; slot `index` is then raw (its
            // old value lives one slot higher) and receives the new value
            // before the live range grows over it.
            unsafe {
                let spot = self.buf.slot(index);
                ptr::copy(spot, spot.add(1), self.len - index);
                spot.write(value);
            }
            self.len += 1;
            // SAFETY: slot `index` is live again.
            return Ok(unsafe { &mut *self.buf.slot(index) });
        }

        let mut grown = RawStorage::allocate(self.grown_capacity()?)?;
        // SAFETY: the new block has room for `len + 1` values and cannot
        // overlap the old one. Order of operations keeps every unwind
        // path strong: a prefix-relocation panic cleans the prefix and
        // lets `value` drop as a live local; a suffix-relocation panic
        // hits the armed guard, which destroys the prefix plus the
        // inserted value while the old block is still fully intact (the
        // duplication leg is the only one that can panic, and it does
        // not consume its source).
        unsafe {
            let old = self.buf.as_mut_ptr();
            let new = grown.as_mut_ptr();
            relocate_slice(old, new, index);
            new.add(index).write(value);
            let guard = DropRange {
                base: new,
                count: index + 1,
            };
            relocate_slice(old.add(index), new.add(index + 1), self.len - index);
            mem::forget(guard);
            release_source(old, self.len);
        }
        self.buf.swap(&mut grown);
        self.len += 1;
        // SAFETY: slot `index` of the swapped-in block is live.
        Ok(unsafe { &mut *self.buf.slot(index) })
    }

    /// Overwrite this sequence with a deep copy of `source`.
    ///
    /// When `source.len() > capacity()` a full temporary copy is built
    /// and swapped in, so a failure leaves this sequence untouched
    /// (strong guarantee). When the current block suffices, storage is
    /// reused in place: the shared prefix is overwritten element-wise,
    /// then the extra tail is clone-constructed (source longer) or
    /// destroyed (source shorter). The in-place leg offers only the
    /// *weak* guarantee — a panic partway leaves a valid but partially
    /// overwritten sequence. This mirrors standard-container assignment;
    /// always reallocating would change the performance contract, so the
    /// trade-off is deliberate.
    pub fn assign(&mut self, source: &Self) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        if source.len > self.buf.capacity() {
            let mut copy = source.try_clone()?;
            self.swap(&mut copy);
            return Ok(());
        }

        let shared = self.len.min(source.len);
        self.as_mut_slice()[..shared].clone_from_slice(&source[..shared]);

        if source.len > self.len {
            for value in &source[self.len..] {
                let tail = self.len;
                // SAFETY: `tail < source.len <= capacity`, a raw slot.
                // Length advances per element so a panicking clone leaves
                // a valid (partially assigned) sequence.
                unsafe { self.buf.slot(tail).write(value.clone()) };
                self.len = tail + 1;
            }
        } else {
            self.truncate_to(source.len);
        }
        Ok(())
    }

    /// Capacity after one doubling step: `max(1, 2 × capacity)`.
    fn grown_capacity(&self) -> Result<usize, ArrayError> {
        let capacity = self.buf.capacity();
        if capacity == 0 {
            return Ok(1);
        }
        capacity
            .checked_mul(2)
            .ok_or(ArrayError::CapacityOverflow { elements: capacity })
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // SAFETY: `[0, len)` is live; for an empty sequence the dangling
        // sentinel is non-null and aligned, which is all a zero-length
        // slice requires.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: as above, with exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is live; the block itself is released by
        // `RawStorage::drop` afterwards, destructor-free.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len));
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[i32]) -> DynamicArray<i32> {
        let mut array = DynamicArray::new();
        for &v in values {
            array.push(v).unwrap();
        }
        array
    }

    #[test]
    fn new_is_empty_without_allocation() {
        let array: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(array.len(), 0);
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 0);
    }

    #[test]
    fn with_len_value_constructs_defaults() {
        let array: DynamicArray<i32> = DynamicArray::with_len(7).unwrap();
        assert_eq!(array.len(), 7);
        assert_eq!(array.capacity(), 7);
        assert!(array.iter().all(|&v| v == 0));

        let strings: DynamicArray<String> = DynamicArray::with_len(3).unwrap();
        assert!(strings.iter().all(String::is_empty));
    }

    #[test]
    fn push_grows_by_doubling_from_one() {
        let mut array = DynamicArray::new();
        let mut observed = Vec::new();
        for v in 0..9 {
            array.push(v).unwrap();
            if observed.last() != Some(&array.capacity()) {
                observed.push(array.capacity());
            }
        }
        assert_eq!(observed, [1, 2, 4, 8, 16]);
        assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn push_returns_reference_to_stored_element() {
        let mut array = DynamicArray::new();
        *array.push(1).unwrap() += 41;
        assert_eq!(array[0], 42);
    }

    #[test]
    fn reserve_allocates_exactly_the_requested_slots() {
        let mut array = filled(&[1, 2, 3]);
        array.reserve(11).unwrap();
        assert_eq!(array.capacity(), 11);
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn resize_grows_and_shrinks() {
        let mut array = filled(&[5, 6]);
        array.resize(5).unwrap();
        assert_eq!(array.as_slice(), &[5, 6, 0, 0, 0]);
        array.resize(1).unwrap();
        assert_eq!(array.as_slice(), &[5]);
        array.resize(0).unwrap();
        assert!(array.is_empty());
    }

    #[test]
    fn insert_shifts_the_tail_right() {
        let mut array = filled(&[0, 1, 2, 3, 4]);
        array.reserve(8).unwrap();
        let inserted = array.insert(2, 99).unwrap();
        assert_eq!(*inserted, 99);
        assert_eq!(array.as_slice(), &[0, 1, 99, 2, 3, 4]);
    }

    #[test]
    fn insert_at_both_ends() {
        let mut array = filled(&[1, 2]);
        array.insert(0, 0).unwrap();
        array.insert(3, 3).unwrap();
        assert_eq!(array.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn insert_when_full_relocates_around_the_new_element() {
        let mut array = filled(&[10, 20, 30, 40]);
        assert_eq!(array.capacity(), 4);
        array.insert(1, 15).unwrap();
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.as_slice(), &[10, 15, 20, 30, 40]);
    }

    #[test]
    fn insert_into_empty() {
        let mut array = DynamicArray::new();
        array.insert(0, 9).unwrap();
        assert_eq!(array.as_slice(), &[9]);
    }

    #[test]
    #[should_panic(expected = "insert index 3 out of bounds")]
    fn insert_past_the_end_panics() {
        let mut array = filled(&[1, 2]);
        let _ = array.insert(3, 0);
    }

    #[test]
    fn remove_is_the_structural_inverse_of_insert() {
        let mut array = filled(&[0, 1, 2, 3, 4]);
        array.insert(2, 99).unwrap();
        assert_eq!(array.remove(2), 99);
        assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "remove index 2 out of bounds")]
    fn remove_past_the_end_panics() {
        let mut array = filled(&[1, 2]);
        let _ = array.remove(2);
    }

    #[test]
    fn pop_returns_elements_back_to_front() {
        let mut array = filled(&[1, 2, 3]);
        assert_eq!(array.pop(), Some(3));
        assert_eq!(array.pop(), Some(2));
        assert_eq!(array.pop(), Some(1));
        assert_eq!(array.pop(), None);
    }

    #[test]
    fn try_clone_is_storage_independent() {
        let original = filled(&[1, 2, 3]);
        let mut copy = original.try_clone().unwrap();
        assert_eq!(copy.capacity(), 3);
        copy[0] = 100;
        copy.push(4).unwrap();
        assert_eq!(original.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[100, 2, 3, 4]);
    }

    #[test]
    fn assign_reuses_storage_when_it_fits() {
        let mut target = filled(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let capacity = target.capacity();
        let source = filled(&[9, 9]);
        target.assign(&source).unwrap();
        assert_eq!(target.as_slice(), &[9, 9]);
        assert_eq!(target.capacity(), capacity);
    }

    #[test]
    fn assign_extends_in_place_when_source_is_longer() {
        let mut target = filled(&[1, 2]);
        target.reserve(8).unwrap();
        let source = filled(&[7, 8, 9, 10]);
        target.assign(&source).unwrap();
        assert_eq!(target.as_slice(), &[7, 8, 9, 10]);
        assert_eq!(target.capacity(), 8);
    }

    #[test]
    fn assign_reallocates_when_source_exceeds_capacity() {
        let mut target = filled(&[1]);
        let source = filled(&[1, 2, 3, 4, 5]);
        target.assign(&source).unwrap();
        assert_eq!(target.as_slice(), source.as_slice());
    }

    #[test]
    fn take_leaves_an_empty_usable_sequence() {
        let mut original = filled(&[1, 2, 3]);
        let moved = original.take();
        assert_eq!(moved.as_slice(), &[1, 2, 3]);
        assert!(original.is_empty());
        original.push(9).unwrap();
        assert_eq!(original.as_slice(), &[9]);
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = filled(&[1, 2]);
        let mut b = filled(&[3, 4, 5]);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[3, 4, 5]);
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    #[test]
    #[should_panic]
    fn indexing_past_the_end_panics() {
        let array = filled(&[1]);
        let _ = array[1];
    }

    #[test]
    fn slice_views_iterate_the_live_range() {
        let mut array = filled(&[1, 2, 3]);
        let doubled: Vec<i32> = array.iter().map(|v| v * 2).collect();
        assert_eq!(doubled, [2, 4, 6]);
        for v in &mut array {
            *v += 1;
        }
        assert_eq!(array.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn zero_sized_elements_are_supported() {
        let mut array = DynamicArray::new();
        for _ in 0..100 {
            array.push(()).unwrap();
        }
        assert_eq!(array.len(), 100);
        array.insert(50, ()).unwrap();
        array.remove(0);
        assert!(array.pop().is_some());
        assert_eq!(array.len(), 99);
    }

    #[test]
    fn doubling_overflow_is_reported_for_zero_sized_elements() {
        let mut array: DynamicArray<()> = DynamicArray::new();
        array.reserve(usize::MAX).unwrap();
        assert!(matches!(
            array.grown_capacity(),
            Err(ArrayError::CapacityOverflow { .. })
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// One step of the sequence-op model.
        #[derive(Clone, Debug)]
        enum Op {
            Push(i32),
            Pop,
            Insert(usize, i32),
            Remove(usize),
            Resize(usize),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<i32>().prop_map(Op::Push),
                Just(Op::Pop),
                (0usize..32, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
                (0usize..32).prop_map(Op::Remove),
                (0usize..48).prop_map(Op::Resize),
            ]
        }

        proptest! {
            #[test]
            fn behaves_like_the_standard_vector(
                ops in proptest::collection::vec(op_strategy(), 1..100),
            ) {
                let mut array = DynamicArray::new();
                let mut model: Vec<i32> = Vec::new();
                for op in ops {
                    match op {
                        Op::Push(v) => {
                            array.push(v).unwrap();
                            model.push(v);
                        }
                        Op::Pop => {
                            prop_assert_eq!(array.pop(), model.pop());
                        }
                        Op::Insert(i, v) => {
                            let i = i.min(model.len());
                            array.insert(i, v).unwrap();
                            model.insert(i, v);
                        }
                        Op::Remove(i) => {
                            if i < model.len() {
                                prop_assert_eq!(array.remove(i), model.remove(i));
                            }
                        }
                        Op::Resize(n) => {
                            array.resize(n).unwrap();
                            model.resize(n, 0);
                        }
                    }
                    prop_assert_eq!(array.as_slice(), model.as_slice());
                    prop_assert!(array.capacity() >= array.len());
                }
            }

            #[test]
            fn clone_then_mutate_never_aliases(
                values in proptest::collection::vec(any::<i32>(), 0..40),
            ) {
                let mut original = DynamicArray::new();
                for &v in &values {
                    original.push(v).unwrap();
                }
                let mut copy = original.try_clone().unwrap();
                for v in &mut copy {
                    *v = v.wrapping_add(1);
                }
                prop_assert_eq!(original.as_slice(), values.as_slice());
            }

            #[test]
            fn with_len_yields_defaults(n in 0usize..200) {
                let array: DynamicArray<i64> = DynamicArray::with_len(n).unwrap();
                prop_assert_eq!(array.len(), n);
                prop_assert!(array.capacity() >= n);
                prop_assert!(array.iter().all(|&v| v == 0));
            }
        }
    }
}
