//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
///
/// Only allocation-level failures are reported through this type; panics
/// from element code (`Clone`, `Default`, relocation fallbacks) unwind
/// instead, with the safety guarantees documented on each operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The global allocator could not satisfy a block request.
    AllocFailed {
        /// Size of the rejected request in bytes.
        bytes: usize,
    },
    /// A capacity computation exceeded the maximum storable size,
    /// either in layout arithmetic or in the doubling growth step.
    CapacityOverflow {
        /// Number of element slots requested.
        elements: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
            Self::CapacityOverflow { elements } => {
                write!(
                    f,
                    "capacity overflow: {elements} element slots exceed the maximum storable size"
                )
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_request_details() {
        let err = ArrayError::AllocFailed { bytes: 4096 };
        assert!(err.to_string().contains("4096"));

        let err = ArrayError::CapacityOverflow {
            elements: usize::MAX,
        };
        assert!(err.to_string().contains("overflow"));
    }
}
