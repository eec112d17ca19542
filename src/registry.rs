// src/registry.rs
//! Symbol registry: dictionaries of words mapped to registry-wide symbols.
//! Lets events and their named parameters be referenced by compact ids while
//! keeping a human-readable name in every vocabulary that knows them.

use crate::config::{ConfigError, RegistryConfig};
use crate::dictionary::Dictionary;
use crate::symbol::{Symbol, SymbolType};
use tracing::{debug, error, info, trace};

const LISTING: &str = "harfang_symbols::listing";

pub struct SymbolRegistry {
    /// Dictionaries in creation order; index 0 is the default dictionary.
    dictionaries: Vec<Dictionary>,
    /// Index of the selected dictionary. Always in bounds.
    selected: usize,
    /// Last id handed out, shared by every dictionary.
    last_id: u32,
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolRegistry {
    /// Create a registry with its default dictionary, named `"default"`.
    pub fn new() -> Self {
        Self::build(RegistryConfig::default())
    }

    /// Create a registry from explicit settings.
    pub fn with_config(cfg: RegistryConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::build(cfg))
    }

    fn build(cfg: RegistryConfig) -> Self {
        debug!(
            default = %cfg.default_dictionary,
            first_id = cfg.first_id,
            "creating symbol registry"
        );
        Self {
            dictionaries: vec![Dictionary::new(cfg.default_dictionary)],
            selected: 0,
            last_id: cfg.first_id - 1,
        }
    }

    // --- Dictionaries ---

    /// "" is the default dictionary; anything else is an exact name match.
    fn dictionary_index(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return Some(0);
        }
        self.dictionaries.iter().position(|d| d.name() == name)
    }

    /// Create a new, empty dictionary.
    /// Does nothing if one with that name already exists.
    pub fn add_dictionary(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.dictionary_index(&name).is_some() {
            trace!(dictionary = %name, "dictionary already exists");
            return;
        }
        debug!(dictionary = %name, "adding dictionary");
        self.dictionaries.push(Dictionary::new(name));
    }

    /// Retrieve a dictionary by name.
    pub fn get_dictionary(&self, name: &str) -> Option<&Dictionary> {
        self.dictionary_index(name).map(|i| &self.dictionaries[i])
    }

    /// Make `name` the selected dictionary.
    /// Does nothing if the dictionary doesn't exist.
    pub fn select_dictionary(&mut self, name: &str) {
        match self.dictionary_index(name) {
            Some(i) => {
                debug!(dictionary = %self.dictionaries[i].name(), "selecting dictionary");
                self.selected = i;
            }
            None => debug!(dictionary = %name, "cannot select unknown dictionary"),
        }
    }

    pub fn selected_dictionary(&self) -> &Dictionary {
        &self.dictionaries[self.selected]
    }

    /// All dictionaries, in creation order.
    pub fn dictionaries(&self) -> impl Iterator<Item = &Dictionary> + '_ {
        self.dictionaries.iter()
    }

    /// Log every dictionary name, in creation order (for tests and debugging).
    pub fn list_dictionaries(&self) {
        info!(target: LISTING, count = self.dictionaries.len(), "dictionaries");
        for (i, d) in self.dictionaries.iter().enumerate() {
            info!(
                target: LISTING,
                dictionary = %d.name(),
                symbols = d.len(),
                selected = (i == self.selected),
                "dictionary"
            );
        }
    }

    // --- Symbols ---

    /// Last id handed out. Ids are never reused.
    pub fn last_id(&self) -> u32 {
        self.last_id
    }

    /// Mint a new symbol of `kind` and store it in `dict_name` under `sym_name`,
    /// replacing any previous entry for that word.
    ///
    /// Callers outside the crate go through [`gen_sym`](Self::gen_sym).
    pub(crate) fn create_symbol(
        &mut self,
        dict_name: &str,
        sym_name: &str,
        kind: SymbolType,
    ) -> Option<Symbol> {
        let Some(index) = self.dictionary_index(dict_name) else {
            debug!(dictionary = %dict_name, symbol = %sym_name, "no such dictionary");
            return None;
        };
        let Some(id) = self.last_id.checked_add(1) else {
            error!(symbol = %sym_name, "symbol ids exhausted");
            return None;
        };
        self.last_id = id;

        let symbol = Symbol::new(id, kind);
        let dict = &mut self.dictionaries[index];
        trace!(dictionary = %dict.name(), symbol = %sym_name, id, %kind, "minted symbol");
        dict.insert(sym_name, symbol);
        Some(symbol)
    }

    /// Look a symbol up, creating it in `dict_name` if the word is new.
    /// Returns `None` when the dictionary doesn't exist, or when the word is
    /// new and the id counter is exhausted.
    /// An empty `dict_name` means the default dictionary.
    pub fn gen_sym(&mut self, dict_name: &str, sym_name: &str) -> Option<Symbol> {
        let index = self.dictionary_index(dict_name)?;
        if let Some(existing) = self.dictionaries[index].get(sym_name) {
            return Some(existing);
        }
        self.create_symbol(dict_name, sym_name, SymbolType::Unspecified)
    }

    /// Look a symbol up without creating anything.
    /// An empty `dict_name` means the default dictionary.
    pub fn get_symbol(&self, dict_name: &str, sym_name: &str) -> Option<Symbol> {
        self.get_dictionary(dict_name)?.get(sym_name)
    }

    /// Make `new_sym_name` in `new_dict_name` another name for the symbol found
    /// at `old_sym_name` in `old_dict_name`.
    ///
    /// Same dictionary means synonym, different dictionaries mean translation.
    /// No id is minted. Fails, leaving everything untouched, when the source
    /// symbol or the target dictionary doesn't exist.
    pub fn alias_symbol(
        &mut self,
        new_dict_name: &str,
        new_sym_name: &str,
        old_dict_name: &str,
        old_sym_name: &str,
    ) -> Option<Symbol> {
        let Some(symbol) = self.get_symbol(old_dict_name, old_sym_name) else {
            debug!(
                dictionary = %old_dict_name,
                symbol = %old_sym_name,
                "alias source not found"
            );
            return None;
        };
        let Some(index) = self.dictionary_index(new_dict_name) else {
            debug!(dictionary = %new_dict_name, "alias target dictionary not found");
            return None;
        };

        let dict = &mut self.dictionaries[index];
        trace!(
            dictionary = %dict.name(),
            symbol = %new_sym_name,
            id = symbol.id(),
            "aliasing symbol"
        );
        dict.insert(new_sym_name, symbol);
        Some(symbol)
    }

    /// Name of the symbol `id` in `dict_name`.
    /// With several synonyms, the first in word order wins.
    pub fn symbol_name(&self, dict_name: &str, id: u32) -> Option<&str> {
        self.get_dictionary(dict_name)?.name_of(id)
    }

    /// Human-readable form of `symbol` in the selected dictionary, or `#id`
    /// when the selected dictionary has no word for it.
    pub fn display_name(&self, symbol: Symbol) -> String {
        match self.selected_dictionary().name_of(symbol.id()) {
            Some(word) => word.to_string(),
            None => format!("#{}", symbol.id()),
        }
    }

    /// Log every `(word, id, type)` entry of a dictionary (for tests and debugging).
    pub fn list_symbols(&self, dict_name: &str) {
        let Some(dict) = self.get_dictionary(dict_name) else {
            info!(target: LISTING, dictionary = %dict_name, "no such dictionary");
            return;
        };
        info!(target: LISTING, dictionary = %dict.name(), count = dict.len(), "symbols");
        for (word, sym) in dict.iter() {
            info!(
                target: LISTING,
                symbol = %word,
                id = sym.id(),
                kind = sym.kind().as_u32(),
                "symbol"
            );
        }
    }
}
