//! Benchmark workloads for the contig sequence container.
//!
//! Provides deterministic sequence builders shared by the Criterion
//! benches so that every run measures the same shapes:
//!
//! - [`sequential`]: n ascending values, built by repeated append
//! - [`prefilled`]: n ascending values with capacity reserved up front

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use contig::{ArrayError, DynamicArray};

/// Build a sequence of `n` ascending values by repeated append, letting
/// the doubling growth policy run.
pub fn sequential(n: u64) -> Result<DynamicArray<u64>, ArrayError> {
    let mut seq = DynamicArray::new();
    for v in 0..n {
        seq.push(v)?;
    }
    Ok(seq)
}

/// Build a sequence of `n` ascending values with capacity reserved up
/// front, so no relocation happens during the fill.
pub fn prefilled(n: u64) -> Result<DynamicArray<u64>, ArrayError> {
    let mut seq = DynamicArray::new();
    seq.reserve(n as usize)?;
    for v in 0..n {
        seq.push(v)?;
    }
    Ok(seq)
}
