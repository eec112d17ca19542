// src/py/wrappers.rs
//! Python-facing helper functions and module initialization.
#![allow(non_local_definitions)]

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use super::registry::{PySymbol, PySymbolRegistry};

#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Handle on the process-wide registry.
#[pyfunction]
fn global_registry() -> PySymbolRegistry {
    PySymbolRegistry::from_shared(crate::shared::global().clone())
}

fn populate_module(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_function(wrap_pyfunction!(global_registry, m)?)?;
    m.add_class::<PySymbolRegistry>()?;
    m.add_class::<PySymbol>()?;
    m.add("UNSPECIFIED", crate::SymbolType::Unspecified.as_u32())?;
    m.add("OBJECT", crate::SymbolType::Object.as_u32())?;
    m.add("EVENT", crate::SymbolType::Event.as_u32())?;
    Ok(())
}

#[pymodule]
fn harfang_symbols(_py: Python, m: &PyModule) -> PyResult<()> {
    populate_module(m)
}

pub fn make_module(py: Python) -> PyResult<Py<PyModule>> {
    let m = PyModule::new(py, "harfang_symbols")?;
    populate_module(m)?;
    Ok(m.into())
}
