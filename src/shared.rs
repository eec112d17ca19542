// src/shared.rs
//! Thread-safe handle around a [`SymbolRegistry`].
//!
//! The registry itself is single-owner. Code that shares one between threads
//! (event producers and the dispatcher, typically) goes through this handle,
//! which serializes every operation behind one lock.

use crate::config::{ConfigError, RegistryConfig};
use crate::registry::SymbolRegistry;
use crate::symbol::Symbol;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone, Default)]
pub struct SharedSymbolRegistry {
    inner: Arc<Mutex<SymbolRegistry>>,
}

impl SharedSymbolRegistry {
    pub fn new(registry: SymbolRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Lock the registry for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, SymbolRegistry> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&mut SymbolRegistry) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn add_dictionary(&self, name: &str) {
        self.inner.lock().add_dictionary(name);
    }

    pub fn gen_sym(&self, dict_name: &str, sym_name: &str) -> Option<Symbol> {
        self.inner.lock().gen_sym(dict_name, sym_name)
    }

    pub fn get_symbol(&self, dict_name: &str, sym_name: &str) -> Option<Symbol> {
        self.inner.lock().get_symbol(dict_name, sym_name)
    }

    pub fn alias_symbol(
        &self,
        new_dict_name: &str,
        new_sym_name: &str,
        old_dict_name: &str,
        old_sym_name: &str,
    ) -> Option<Symbol> {
        self.inner
            .lock()
            .alias_symbol(new_dict_name, new_sym_name, old_dict_name, old_sym_name)
    }

    /// Owned copy of the name, since the lock is released on return.
    pub fn symbol_name(&self, dict_name: &str, id: u32) -> Option<String> {
        self.inner
            .lock()
            .symbol_name(dict_name, id)
            .map(str::to_string)
    }

    pub fn display_name(&self, symbol: Symbol) -> String {
        self.inner.lock().display_name(symbol)
    }
}

/// Build a registry from a loaded config, falling back to defaults on error.
fn registry_or_default(cfg: Result<RegistryConfig, ConfigError>) -> SymbolRegistry {
    cfg.and_then(SymbolRegistry::with_config).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring symbol registry environment, using defaults");
        SymbolRegistry::new()
    })
}

static GLOBAL: Lazy<SharedSymbolRegistry> =
    Lazy::new(|| SharedSymbolRegistry::new(registry_or_default(RegistryConfig::from_env())));

/// Process-wide registry, configured from the environment on first use.
pub fn global() -> &'static SharedSymbolRegistry {
    &GLOBAL
}
