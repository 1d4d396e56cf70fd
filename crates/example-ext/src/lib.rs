//! Example Ext -- a minimal native extension class.
//!
//! This crate provides [`ExampleClass`], a stateless type grouping two
//! utility operations: integer multiplication and printing a string to
//! standard output. The Python extension (`example-ext-python`) and the
//! command-line wrapper (`example-ext-cli`) are both thin layers over it.
//!
//! # Quick Start
//!
//! ```
//! use example_ext::prelude::*;
//!
//! let example = ExampleClass::new();
//! assert_eq!(example.multiply(3, 4), 12);
//! assert_eq!(example.multiply(-2, 5), -10);
//!
//! let mut out = Vec::new();
//! example.write_string(&mut out, "hello").unwrap();
//! assert_eq!(out, b"hello\n");
//! ```
//!
//! # Overflow
//!
//! [`ExampleClass::multiply`] wraps on overflow (two's complement). Use
//! [`ExampleClass::checked_multiply`] to detect it instead.

#![deny(unsafe_code)]

pub mod example;

pub use example::{multiply, print_string, ExampleClass};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by example operations.
#[derive(Debug, thiserror::Error)]
pub enum ExtError {
    /// The product of the operands does not fit in an `i32`.
    #[error("integer overflow computing {a} * {b}")]
    Overflow { a: i32, b: i32 },

    /// Writing the string to the output stream failed.
    #[error("failed to write string: {0}")]
    Write(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::example::{multiply, print_string, ExampleClass};
    pub use crate::ExtError;
}
