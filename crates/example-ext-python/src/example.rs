//! Python-facing example class.
//!
//! [`PyExampleClass`] is a `#[pyclass]` wrapping the stateless Rust
//! [`ExampleClass`]. Python ints outside the `i32` range are rejected during
//! argument conversion with `OverflowError`.

use example_ext::{ExampleClass, ExtError};
use pyo3::prelude::*;

/// Maps an [`ExtError`] onto the matching Python exception.
fn ext_error_to_pyerr(err: ExtError) -> PyErr {
    match err {
        ExtError::Overflow { .. } => pyo3::exceptions::PyOverflowError::new_err(err.to_string()),
        ExtError::Write(e) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
    }
}

/// Example class exposed to Python.
///
/// Usage from Python:
/// ```python
/// from _example import ExampleClass
/// ex = ExampleClass()
/// assert ex.multiply(3, 4) == 12
/// ex.print_string("hello")
/// ex.printString("hello")
/// ```
#[pyclass(name = "ExampleClass", frozen)]
pub struct PyExampleClass {
    inner: ExampleClass,
}

#[pymethods]
impl PyExampleClass {
    #[new]
    fn new() -> Self {
        Self {
            inner: ExampleClass::new(),
        }
    }

    /// Multiply two integers. Overflow wraps at the 32-bit boundary.
    fn multiply(&self, a: i32, b: i32) -> i32 {
        self.inner.multiply(a, b)
    }

    /// Multiply two integers, raising OverflowError if the product does not
    /// fit in 32 bits.
    fn checked_multiply(&self, a: i32, b: i32) -> PyResult<i32> {
        self.inner.checked_multiply(a, b).map_err(ext_error_to_pyerr)
    }

    /// Print a string followed by a newline to the process stdout.
    fn print_string(&self, text: &str) {
        self.inner.print_string(text);
    }

    /// camelCase alias of `print_string`.
    #[pyo3(name = "printString")]
    fn print_string_camel(&self, text: &str) {
        self.inner.print_string(text);
    }

    fn __repr__(&self) -> &'static str {
        "ExampleClass()"
    }
}
