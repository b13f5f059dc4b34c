//! Instrumented element types for contig development.
//!
//! [`Probe`] is an element type that counts every construction,
//! duplication, and drop through a shared [`ProbeCounters`] handle, and
//! can be armed to panic on the Nth duplication. It relocates by
//! duplication (`Relocate::TRIVIAL == false`), so container growth runs
//! observable, fallible element code — exactly what the failure-safety
//! tests need to exercise.

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use contig::{ArrayError, DynamicArray, Relocate};

#[derive(Default)]
struct Inner {
    constructed: Cell<u64>,
    dropped: Cell<u64>,
    duplications: Cell<u64>,
    fail_at_duplication: Cell<Option<u64>>,
}

/// Shared counter handle observing every [`Probe`] lifecycle event.
///
/// Clone the handle freely; all clones observe the same counters.
#[derive(Clone, Default)]
pub struct ProbeCounters {
    inner: Rc<Inner>,
}

impl ProbeCounters {
    pub fn fresh() -> Self {
        Self::default()
    }

    /// Total values constructed (including duplicates).
    pub fn constructed(&self) -> u64 {
        self.inner.constructed.get()
    }

    /// Total values dropped.
    pub fn dropped(&self) -> u64 {
        self.inner.dropped.get()
    }

    /// Total duplications attempted and completed.
    pub fn duplications(&self) -> u64 {
        self.inner.duplications.get()
    }

    /// Values currently alive.
    pub fn live(&self) -> u64 {
        self.constructed() - self.dropped()
    }

    /// Arm fault injection: counting from now, the `nth` duplication
    /// (1-based) panics before constructing anything.
    pub fn fail_on_nth_duplication(&self, nth: u64) {
        self.inner
            .fail_at_duplication
            .set(Some(self.duplications() + nth));
    }

    /// Disarm fault injection.
    pub fn disarm(&self) {
        self.inner.fail_at_duplication.set(None);
    }

    fn on_construct(&self) {
        self.inner.constructed.set(self.constructed() + 1);
    }

    fn on_drop(&self) {
        self.inner.dropped.set(self.dropped() + 1);
    }

    fn on_duplicate(&self) {
        let count = self.duplications() + 1;
        if self.inner.fail_at_duplication.get() == Some(count) {
            panic!("injected failure on duplication {count}");
        }
        self.inner.duplications.set(count);
    }
}

/// An instrumented element carrying an `i64` payload.
pub struct Probe {
    value: i64,
    counters: ProbeCounters,
}

impl Probe {
    pub fn new(counters: &ProbeCounters, value: i64) -> Self {
        counters.on_construct();
        Self {
            value,
            counters: counters.clone(),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        // May panic when fault injection is armed; nothing is constructed
        // in that case.
        self.counters.on_duplicate();
        Probe::new(&self.counters, self.value)
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.counters.on_drop();
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Probe").field(&self.value).finish()
    }
}

impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Probe {}

// SAFETY: Probe opts out of bitwise relocation so that growth runs its
// (countable, injectable) duplication path; `duplicate_to` writes exactly
// one live value or panics leaving the slot raw.
unsafe impl Relocate for Probe {
    const TRIVIAL: bool = false;

    unsafe fn duplicate_to(&self, dst: *mut Self) {
        // SAFETY: caller provides a raw slot valid for one write.
        unsafe { dst.write(self.clone()) }
    }
}

/// Build a probe sequence from payload values.
pub fn fill(counters: &ProbeCounters, values: &[i64]) -> Result<DynamicArray<Probe>, ArrayError> {
    let mut array = DynamicArray::new();
    for &value in values {
        array.push(Probe::new(counters, value))?;
    }
    Ok(array)
}

/// Payload values currently held by a probe sequence.
pub fn payloads(array: &DynamicArray<Probe>) -> Vec<i64> {
    array.iter().map(Probe::value).collect()
}
