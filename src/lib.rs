// src/lib.rs
//! Harfang symbols: event names and named parameters as compact ids.
//!
//! Words live in named dictionaries (one per language or vocabulary). Each word
//! maps to a [`Symbol`], an id that is unique across the whole registry. A word
//! in another dictionary, or a second word in the same one, can be made an
//! alias of an existing symbol, so translations and synonyms dispatch to the
//! same events.

pub mod config;
pub mod dictionary;
pub mod registry;
pub mod shared;
pub mod symbol;

#[cfg(feature = "pyo3")]
pub mod py;

pub use config::{ConfigError, RegistryConfig};
pub use dictionary::Dictionary;
pub use registry::SymbolRegistry;
pub use shared::{global, SharedSymbolRegistry};
pub use symbol::{Symbol, SymbolType};

/// Install a `fmt` subscriber printing registry events (INFO and up).
/// Returns false if a global subscriber was already set.
#[cfg(feature = "tracing-subscriber")]
pub fn init_logging() -> bool {
    tracing_subscriber::fmt()
        .with_target(true)
        .try_init()
        .is_ok()
}
