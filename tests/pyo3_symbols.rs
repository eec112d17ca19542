#![cfg(feature = "pyo3")]

use pyo3::prelude::*;

fn new_registry(py: Python) -> PyObject {
    let module = harfang_symbols::py::make_module(py).expect("make_module");
    let registry_type = module
        .as_ref(py)
        .getattr("SymbolRegistry")
        .expect("no SymbolRegistry type");
    registry_type
        .call0()
        .expect("construct SymbolRegistry")
        .into_py(py)
}

#[test]
fn py_translation_round_trip() {
    pyo3::prepare_freethreaded_python();
    Python::with_gil(|py| {
        let reg = new_registry(py);
        let reg = reg.as_ref(py);

        reg.call_method1("add_dictionary", ("french",)).unwrap();
        let bonjour = reg.call_method1("gen_sym", ("french", "bonjour")).unwrap();
        let id: u32 = bonjour.getattr("id").unwrap().extract().unwrap();
        let kind: u32 = bonjour.getattr("kind").unwrap().extract().unwrap();
        assert!(id > 0);
        assert_eq!(kind, 0);

        let hello = reg
            .call_method1("alias_symbol", ("default", "hello", "french", "bonjour"))
            .unwrap();
        let alias_id: u32 = hello.getattr("id").unwrap().extract().unwrap();
        assert_eq!(alias_id, id);

        let name: Option<String> = reg
            .call_method1("symbol_name", ("default", id))
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(name.as_deref(), Some("hello"));

        let last: u32 = reg.call_method0("last_id").unwrap().extract().unwrap();
        assert_eq!(last, id);
    });
}

#[test]
fn py_misses_return_none() {
    pyo3::prepare_freethreaded_python();
    Python::with_gil(|py| {
        let reg = new_registry(py);
        let reg = reg.as_ref(py);

        assert!(reg
            .call_method1("get_symbol", ("nonexistent_dict", "x"))
            .unwrap()
            .is_none());
        assert!(reg
            .call_method1("gen_sym", ("nonexistent_dict", "x"))
            .unwrap()
            .is_none());
        assert!(reg
            .call_method1("alias_symbol", ("default", "a", "default", "b"))
            .unwrap()
            .is_none());
        assert!(reg.call_method1("symbols", ("nowhere",)).unwrap().is_none());

        let dicts: Vec<String> = reg.call_method0("dictionaries").unwrap().extract().unwrap();
        assert_eq!(dicts, vec!["default".to_string()]);
    });
}

#[test]
fn py_rejects_reserved_first_id() {
    pyo3::prepare_freethreaded_python();
    Python::with_gil(|py| {
        let module = harfang_symbols::py::make_module(py).expect("make_module");
        let registry_type = module.as_ref(py).getattr("SymbolRegistry").unwrap();
        let kwargs = pyo3::types::PyDict::new(py);
        kwargs.set_item("first_id", 0u32).unwrap();
        let err = registry_type.call((), Some(kwargs)).unwrap_err();
        assert!(err.is_instance_of::<pyo3::exceptions::PyValueError>(py));
    });
}

#[test]
fn py_symbols_compare_and_hash_by_value() {
    pyo3::prepare_freethreaded_python();
    Python::with_gil(|py| {
        let reg = new_registry(py);
        let locals = pyo3::types::PyDict::new(py);
        locals.set_item("reg", reg.as_ref(py)).unwrap();
        py.run(
            "a = reg.gen_sym('', 'x')\n\
             b = reg.get_symbol('', 'x')\n\
             c = reg.gen_sym('', 'y')\n\
             same = a == b\n\
             differ = a != c\n\
             not_equal = a != b\n\
             vs_int = a == 5\n\
             table = {a: 'x'}\n\
             looked_up = table.get(b)\n\
             distinct = len({a, b, c})\n",
            None,
            Some(locals),
        )
        .unwrap();

        let get = |name: &str| locals.get_item(name).unwrap();
        assert!(get("same").extract::<bool>().unwrap());
        assert!(get("differ").extract::<bool>().unwrap());
        assert!(!get("not_equal").extract::<bool>().unwrap());
        assert!(!get("vs_int").extract::<bool>().unwrap());
        assert_eq!(get("looked_up").extract::<String>().unwrap(), "x");
        assert_eq!(get("distinct").extract::<usize>().unwrap(), 2);
    });
}
