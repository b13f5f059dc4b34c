//! Contiguous resizable sequence storage with explicit relocation and
//! failure-safety contracts.
//!
//! The crate separates *allocated bytes* from *live values* across two
//! layers:
//!
//! ```text
//! DynamicArray<T> (typed container)
//! ├── length — count of live values in [0, length)
//! └── RawStorage<T> — uninitialised block sized for `capacity` values;
//!     performs no construction or destruction
//! ```
//!
//! [`RawStorage`] owns memory and nothing else. [`DynamicArray`] layers
//! value lifetimes on top: slots `[0, len)` are live, `[len, capacity)`
//! are raw. Growth relocates live values into a fresh block according to
//! the [`Relocate`] capability of the element type: a bitwise move when
//! relocation cannot fail (the default, and always sound for owned Rust
//! values), or element-wise duplication when a type opts out — in which
//! case a failure partway leaves the original container untouched.
//!
//! # Failure safety
//!
//! Allocation failures are returned as [`ArrayError`] and leave the
//! container unchanged. Panics from element code (`Clone`, `Default`,
//! [`Relocate::duplicate_to`]) unwind through growth, insertion, and
//! cloning with the strong guarantee: no observable state change and no
//! leaked values. The single documented exception is in-place
//! [`DynamicArray::assign`], which trades the strong guarantee for
//! allocation reuse.
//!
//! # Example
//!
//! ```
//! use contig::DynamicArray;
//!
//! let mut seq = DynamicArray::new();
//! for v in 0..5 {
//!     seq.push(v)?;
//! }
//! seq.insert(2, 99)?;
//! assert_eq!(seq.as_slice(), &[0, 1, 99, 2, 3, 4]);
//! assert_eq!(seq.remove(2), 99);
//! assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 4]);
//! # Ok::<(), contig::ArrayError>(())
//! ```
//!
//! This crate contains `unsafe` code. Every unsafe block carries a
//! `// SAFETY:` comment tying it to the container invariant it relies on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod array;
pub mod error;
pub mod raw;
pub mod relocate;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use error::ArrayError;
pub use raw::RawStorage;
pub use relocate::Relocate;
