// src/dictionary.rs
//! A named vocabulary mapping words to symbols.

use crate::symbol::Symbol;
use std::collections::BTreeMap;

/// One dictionary of the registry.
///
/// Several words may share a symbol (synonyms), and the same symbol may be
/// listed in several dictionaries (translations). Words are kept sorted, which
/// fixes the order used by reverse lookups and listings.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    name: String,
    symbols: BTreeMap<String, Symbol>,
}

impl Dictionary {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up the symbol stored under `word`.
    pub fn get(&self, word: &str) -> Option<Symbol> {
        self.symbols.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.symbols.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate `(word, symbol)` pairs in word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Symbol)> + '_ {
        self.symbols.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// First word (in word order) whose symbol has `id`.
    pub fn name_of(&self, id: u32) -> Option<&str> {
        self.symbols
            .iter()
            .find(|(_, sym)| sym.id() == id)
            .map(|(word, _)| word.as_str())
    }

    /// Store `symbol` under `word`, replacing whatever was there.
    pub(crate) fn insert(&mut self, word: impl Into<String>, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(word.into(), symbol)
    }
}
