//! Per-type relocation capability.
//!
//! When a container grows, its live values must be carried into a fresh
//! block. For owned Rust values a bitwise move is always sound and can
//! never fail, so that is the default. A type may instead opt into
//! element-wise duplication — the safe fallback when relocation is
//! observable (audit hooks, instrumented counters) — at the cost of
//! running fallible user code during growth. The container keeps the
//! strong failure guarantee on both legs: if duplication panics partway,
//! the duplicated prefix is destroyed and the source block is untouched.

use std::mem;
use std::ptr;

/// How values of a type are carried into new storage during growth.
///
/// # Safety
///
/// Implementations with the default `TRIVIAL = true` assert that a bitwise
/// move fully relocates a value (true for any type without external
/// aliases into its own storage slot — in practice, every owned Rust
/// value). Implementations that set `TRIVIAL = false` must override
/// [`duplicate_to`](Relocate::duplicate_to) to write exactly one live
/// value to `dst`, or panic leaving `dst` raw.
///
/// # Opting out of bitwise relocation
///
/// ```
/// use contig::Relocate;
///
/// #[derive(Clone)]
/// struct Audited(String);
///
/// unsafe impl Relocate for Audited {
///     const TRIVIAL: bool = false;
///     unsafe fn duplicate_to(&self, dst: *mut Self) {
///         // SAFETY: caller provides a raw slot valid for one write.
///         unsafe { dst.write(self.clone()) }
///     }
/// }
/// ```
pub unsafe trait Relocate: Sized {
    /// `true` when relocation is a bitwise move and cannot fail.
    const TRIVIAL: bool = true;

    /// Duplicate `self` into the raw slot at `dst`.
    ///
    /// Only called when [`TRIVIAL`](Relocate::TRIVIAL) is `false`.
    ///
    /// # Safety
    ///
    /// `dst` must point to a raw slot valid for a single write of `Self`.
    unsafe fn duplicate_to(&self, dst: *mut Self) {
        let _ = dst;
        unreachable!("duplicate_to is only called when Relocate::TRIVIAL is false");
    }
}

macro_rules! relocate_by_move {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: owned values of these types hold no aliases into
            // their own storage slot; a bitwise move fully relocates them.
            unsafe impl Relocate for $ty {}
        )*
    };
}

relocate_by_move!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
    String,
);

// SAFETY: heap-owning and wrapper types relocate with their bits; their
// pointees never point back at the slot the value lives in.
unsafe impl<T> Relocate for Option<T> {}
// SAFETY: see above.
unsafe impl<T> Relocate for Box<T> {}
// SAFETY: see above.
unsafe impl<T> Relocate for Vec<T> {}
// SAFETY: a shared reference is a plain pointer; the referent stays put.
unsafe impl<T: ?Sized> Relocate for &T {}

/// Drops the live values in `[base, base + count)` when the guard itself
/// is dropped. Armed while a region is partially constructed; disarmed
/// with [`mem::forget`] once the operation commits.
pub(crate) struct DropRange<T> {
    pub base: *mut T,
    pub count: usize,
}

impl<T> Drop for DropRange<T> {
    fn drop(&mut self) {
        // SAFETY: the armer guarantees `count` live values at `base`.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.base, self.count)) };
    }
}

/// Relocate `count` live values from `src` into the raw slots at `dst`.
///
/// On return, `dst` holds `count` live values. On the bitwise leg the
/// source slots must then be treated as raw; on the duplication leg the
/// source values remain live until [`release_source`] runs. If a
/// duplication panics, the already-duplicated prefix in `dst` is dropped
/// and the source is left fully intact.
///
/// # Safety
///
/// `src` must hold `count` live values, `dst` must provide `count` raw
/// slots, and the two ranges must not overlap.
pub(crate) unsafe fn relocate_slice<T: Relocate>(src: *const T, dst: *mut T, count: usize) {
    if T::TRIVIAL {
        // SAFETY: caller guarantees validity and non-overlap.
        unsafe { ptr::copy_nonoverlapping(src, dst, count) };
        return;
    }

    let mut guard = DropRange {
        base: dst,
        count: 0,
    };
    for offset in 0..count {
        // SAFETY: `src + offset` is live per the caller contract and
        // `dst + offset` is the next raw slot.
        unsafe { (*src.add(offset)).duplicate_to(dst.add(offset)) };
        guard.count = offset + 1;
    }
    mem::forget(guard);
}

/// Destroy the source values left behind by [`relocate_slice`].
///
/// A no-op on the bitwise leg (the slots are already raw). On the
/// duplication leg this drops the `count` still-live originals.
///
/// # Safety
///
/// `src` and `count` must describe the exact source range of a completed
/// `relocate_slice` call, and the slots must not be touched afterwards.
pub(crate) unsafe fn release_source<T: Relocate>(src: *mut T, count: usize) {
    if !T::TRIVIAL {
        // SAFETY: the duplication leg leaves the originals live.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(src, count)) };
    }
}
