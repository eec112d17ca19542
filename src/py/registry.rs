// src/py/registry.rs
//! Python-facing registry and symbol wrappers.
#![allow(non_local_definitions)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::pyclass::CompareOp;

use crate::config::RegistryConfig;
use crate::registry::SymbolRegistry;
use crate::shared::SharedSymbolRegistry;
use crate::symbol::Symbol;

/// A symbol as seen from Python: id plus numeric type tag.
#[pyclass(name = "Symbol")]
#[derive(Clone)]
pub struct PySymbol {
    #[pyo3(get)]
    pub id: u32,
    #[pyo3(get)]
    pub kind: u32,
}

impl From<Symbol> for PySymbol {
    fn from(s: Symbol) -> Self {
        Self {
            id: s.id(),
            kind: s.kind().as_u32(),
        }
    }
}

#[pymethods]
impl PySymbol {
    fn __repr__(&self) -> String {
        format!("Symbol(id={}, kind={})", self.id, self.kind)
    }

    fn __richcmp__(&self, other: PyRef<PySymbol>, op: CompareOp, py: Python) -> PyObject {
        let same = self.id == other.id && self.kind == other.kind;
        match op {
            CompareOp::Eq => same.into_py(py),
            CompareOp::Ne => (!same).into_py(py),
            _ => py.NotImplemented(),
        }
    }

    fn __hash__(&self) -> u64 {
        ((self.kind as u64) << 32) | self.id as u64
    }
}

#[pyclass(name = "SymbolRegistry")]
#[derive(Clone)]
pub struct PySymbolRegistry {
    pub(crate) inner: SharedSymbolRegistry,
}

impl PySymbolRegistry {
    pub(crate) fn from_shared(inner: SharedSymbolRegistry) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PySymbolRegistry {
    #[new]
    #[pyo3(signature = (default_dictionary = None, first_id = None))]
    fn new(default_dictionary: Option<String>, first_id: Option<u32>) -> PyResult<Self> {
        let mut cfg = RegistryConfig::default();
        if let Some(name) = default_dictionary {
            cfg.default_dictionary = name;
        }
        if let Some(id) = first_id {
            cfg.first_id = id;
        }
        let reg =
            SymbolRegistry::with_config(cfg).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self::from_shared(SharedSymbolRegistry::new(reg)))
    }

    /// Create a dictionary. Does nothing if it already exists.
    fn add_dictionary(&self, name: String) {
        self.inner.add_dictionary(&name);
    }

    /// Select a dictionary. Does nothing if it doesn't exist.
    fn select_dictionary(&self, name: String) {
        self.inner.lock().select_dictionary(&name);
    }

    fn selected_dictionary(&self) -> String {
        self.inner.lock().selected_dictionary().name().to_string()
    }

    /// Dictionary names in creation order.
    fn dictionaries(&self) -> Vec<String> {
        self.inner
            .lock()
            .dictionaries()
            .map(|d| d.name().to_string())
            .collect()
    }

    /// Look up or create a symbol. None if the dictionary doesn't exist.
    fn gen_sym(&self, dict_name: &str, sym_name: &str) -> Option<PySymbol> {
        self.inner.gen_sym(dict_name, sym_name).map(PySymbol::from)
    }

    /// Look up a symbol without creating it.
    fn get_symbol(&self, dict_name: &str, sym_name: &str) -> Option<PySymbol> {
        self.inner.get_symbol(dict_name, sym_name).map(PySymbol::from)
    }

    fn alias_symbol(
        &self,
        new_dict_name: &str,
        new_sym_name: &str,
        old_dict_name: &str,
        old_sym_name: &str,
    ) -> Option<PySymbol> {
        self.inner
            .alias_symbol(new_dict_name, new_sym_name, old_dict_name, old_sym_name)
            .map(PySymbol::from)
    }

    fn symbol_name(&self, dict_name: &str, id: u32) -> Option<String> {
        self.inner.symbol_name(dict_name, id)
    }

    /// `(word, id, kind)` entries of a dictionary, or None if it doesn't exist.
    fn symbols(&self, dict_name: &str) -> Option<Vec<(String, u32, u32)>> {
        let reg = self.inner.lock();
        let dict = reg.get_dictionary(dict_name)?;
        Some(
            dict.iter()
                .map(|(word, s)| (word.to_string(), s.id(), s.kind().as_u32()))
                .collect(),
        )
    }

    fn last_id(&self) -> u32 {
        self.inner.lock().last_id()
    }
}
