//! PyO3 Python bindings for Example Ext.
//!
//! Exposes [`ExampleClass`](example_ext::ExampleClass) to Python as a native
//! extension class.

#![deny(unsafe_code)]

use pyo3::prelude::*;

mod example;

/// The `_example` native module.
#[pymodule]
fn _example(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<example::PyExampleClass>()?;
    tracing::debug!(module = "_example", "registered ExampleClass");
    Ok(())
}
