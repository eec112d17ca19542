// src/py/mod.rs
//! Python bindings for the symbol registry.
#![allow(non_local_definitions)]

pub mod registry;
pub mod wrappers;

// re-export a few helpers for external callers (tests, build scripts, etc.)
pub use wrappers::make_module;
