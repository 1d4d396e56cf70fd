//! The example class and its two operations.
//!
//! [`ExampleClass`] holds no state. It exists to group [`multiply`] and
//! [`print_string`] the way the extension exposes them to a scripting host,
//! so every instance behaves identically and the type is trivially
//! `Send + Sync`.
//!
//! [`multiply`]: ExampleClass::multiply
//! [`print_string`]: ExampleClass::print_string

use std::io::{self, Write};

use crate::ExtError;

// ---------------------------------------------------------------------------
// ExampleClass
// ---------------------------------------------------------------------------

/// A stateless class exposing a multiply and a print operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExampleClass;

impl ExampleClass {
    /// Create a new instance.
    pub fn new() -> Self {
        Self
    }

    /// Multiply two integers.
    ///
    /// Overflow wraps around at the boundary of `i32`, so
    /// `multiply(i32::MAX, 2) == -2`.
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        tracing::trace!(a, b, "multiply");
        a.wrapping_mul(b)
    }

    /// Multiply two integers, failing if the product does not fit in `i32`.
    pub fn checked_multiply(&self, a: i32, b: i32) -> Result<i32, ExtError> {
        tracing::trace!(a, b, "checked_multiply");
        a.checked_mul(b).ok_or(ExtError::Overflow { a, b })
    }

    /// Write `text` followed by a newline to standard output.
    ///
    /// A failed write (e.g. a closed stdout) is reported as a warning and
    /// otherwise ignored.
    pub fn print_string(&self, text: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_string(&mut handle, text) {
            tracing::warn!(error = %e, "print_string: failed to write to stdout");
        }
    }

    /// Write `text` followed by a newline to `out` and flush it.
    ///
    /// The bytes of `text` are written unchanged.
    pub fn write_string<W: Write>(&self, out: &mut W, text: &str) -> Result<(), ExtError> {
        tracing::trace!(len = text.len(), "write_string");
        out.write_all(text.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Multiply two integers with wrapping overflow. See [`ExampleClass::multiply`].
pub fn multiply(a: i32, b: i32) -> i32 {
    ExampleClass.multiply(a, b)
}

/// Print `text` and a newline to stdout. See [`ExampleClass::print_string`].
pub fn print_string(text: &str) {
    ExampleClass.print_string(text)
}
