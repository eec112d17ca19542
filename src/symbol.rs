// src/symbol.rs
//! Symbol values handed out by the registry.
//!
//! A symbol is a positive integer id plus a type tag. Ids come from a single
//! counter shared by every dictionary, so two symbols with the same id are the
//! same concept no matter which dictionary or name they were found under.

use std::fmt;

/// What a symbol denotes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum SymbolType {
    /// Plain symbol with no further classification.
    #[default]
    Unspecified = 0,
    /// Names an object.
    Object = 1,
    /// Names an event.
    Event = 2,
}

impl SymbolType {
    /// Numeric tag of this type (0, 1 or 2).
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for SymbolType {
    type Error = u32;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(SymbolType::Unspecified),
            1 => Ok(SymbolType::Object),
            2 => Ok(SymbolType::Event),
            other => Err(other),
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SymbolType::Unspecified => "symbol",
            SymbolType::Object => "object",
            SymbolType::Event => "event",
        };
        f.write_str(s)
    }
}

/// An interned symbol: registry-wide id plus type.
///
/// Symbols are plain values. Holding one keeps no reference into the
/// registry, so they can be copied into event tables freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: u32,
    kind: SymbolType,
}

impl Symbol {
    /// The "no symbol" value: id 0, unspecified type.
    /// The registry never mints id 0, so this never collides with a real symbol.
    pub const EMPTY: Symbol = Symbol {
        id: 0,
        kind: SymbolType::Unspecified,
    };

    pub(crate) fn new(id: u32, kind: SymbolType) -> Self {
        debug_assert!(id != 0, "id 0 is reserved for Symbol::EMPTY");
        Self { id, kind }
    }

    #[inline]
    pub fn id(self) -> u32 {
        self.id
    }

    #[inline]
    pub fn kind(self) -> SymbolType {
        self.kind
    }

    /// True for the `EMPTY` sentinel.
    pub fn is_empty(self) -> bool {
        self.id == 0
    }

    /// Collapse a lookup result into a plain value, using `EMPTY` for a miss.
    ///
    /// Handy for dispatch tables keyed by raw symbols, where "not found" has to
    /// be a value rather than an `Option`.
    pub fn or_empty(found: Option<Symbol>) -> Symbol {
        found.unwrap_or(Symbol::EMPTY)
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol::EMPTY
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.id, self.kind)
    }
}
